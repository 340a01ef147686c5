fn main() {
    mentify::start();
}
