fn main() {
    deveco_port::app::cli::run();
}
