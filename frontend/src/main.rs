fn main() {
    storefront_admin::start();
}
