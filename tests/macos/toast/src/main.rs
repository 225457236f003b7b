//! Manual toast check.

fn main() {
    println!("Showing toast...");
    toastkit::show_short("Hello from toastkit!");
    println!("Toast requested.");
}
