fn main() {
    scada_launch::app::cli::run();
}
