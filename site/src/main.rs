// Documentation site front-end — Leptos 0.8 CSR entry point

fn main() {
    docsite_web::start();
}
