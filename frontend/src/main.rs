fn main() {
    leave_tracker_frontend::run();
}
