use clap::Parser;

use gildedrose_fixture::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    gildedrose_observability::init_with(config.log_format);

    let stdout = std::io::stdout();
    gildedrose_fixture::run(&config, &mut stdout.lock())
}
