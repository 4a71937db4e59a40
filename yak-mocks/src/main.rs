use yak_mocks::App;

fn main() {
    dioxus::launch(App);
}
