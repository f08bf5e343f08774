fn main() {
    adapter_dashboard_web::start();
}
