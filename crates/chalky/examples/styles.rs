use std::io::Result;

use chalky::shortcuts::{bg, fg, sty};
use chalky::{caps, Chain, Color};

fn main() -> Result<()> {
    chalky::set_title("chalky")?;

    // 1. Compose shortcuts
    let warning = sty::BOLD & fg::YELLOW;
    println!("{}", warning.apply("Careful now!"));

    // 2. Chain selectors
    let (chic, chain) = Chain::new().underline().rgb(215, 40, 39).finish();
    let badge = chain.bg().blue().fg().bright_white().build();
    println!("{} {}", chic.apply("Wow!"), badge.apply(" v0.1 "));

    // 3. Cover the palette
    for color in Color::all() {
        let chalk = Chain::new().color(color).build() & bg::BLACK;
        print!("{} ", chalk.apply(color.name()));
    }
    println!();

    if caps::supports_truecolor() {
        let text = Chain::new().hex("#1e90ff").map_or_else(
            |error| error.to_string(),
            |chain| chain.apply("true colors are supported"),
        );
        println!("{}", text);
    }

    chalky::configure(true);
    println!("{}", warning.apply("plain as can be"));
    Ok(())
}
