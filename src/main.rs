use musicstream::{
    event::events::Event,
    ui::{app::App, router::Page},
    util::{hook::set_panic_hook, log::initialize_logging},
};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> color_eyre::Result<()> {
    setup()?;

    let mut app = App::new();

    // Optional start page, e.g. `musicstream search`. Anything unknown
    // lands on the landing page.
    if let Some(page) = std::env::args().nth(1) {
        app.update(Event::Navigate(Page::parse(&page).into()));
    }

    app.run().await
}

fn setup() -> color_eyre::Result<()> {
    color_eyre::install()?;
    set_panic_hook();
    initialize_logging()
}
