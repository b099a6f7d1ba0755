fn main() {
    create_npm_package::app::cli::run();
}
