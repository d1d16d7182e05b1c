#![allow(clippy::print_stdout)]

use std::error::Error;

use tonality::extract::{Extractor, Pixels};
use tonality::theme::CustomColor;
use tonality::{Argb, Mode, Theme};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // 1. Pick your seed, either from the command line or from a "wallpaper"
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<Argb>()?,
        None => {
            let mut samples = vec![Argb::new(0xff303030); 64 * 48];
            for (index, sample) in samples.iter_mut().enumerate().filter(|(i, _)| i % 5 == 0) {
                let shade = (index % 64) as u8;
                *sample = Argb::from_rgb(0x40 + shade, 0x20, 0xa0 + shade);
            }
            let wallpaper = Pixels::new(64, 48, samples)?.downsample(32);
            Extractor::default().extract(wallpaper.as_ref())?
        }
    };

    // 2. Derive your schemes
    let custom = [CustomColor::new(Argb::new(0xff1b873f), "success".into(), true)];
    let theme = Theme::new(seed, &custom);

    // 3. Use your colors
    for mode in [Mode::Light, Mode::Dark] {
        println!("\n/* {} scheme for seed {} */", mode.name(), seed);
        for (name, value) in theme.scheme(mode).css_properties() {
            println!("{}: {};", name, value);
        }

        for group in theme.custom_colors() {
            let colors = group.group(mode);
            println!("--md-custom-color-{}: {};", group.color().name, colors.color);
            println!("--md-custom-color-on-{}: {};", group.color().name, colors.on_color);
        }
    }

    Ok(())
}
