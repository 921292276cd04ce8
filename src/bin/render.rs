use std::io::{self, Read};
use std::process::ExitCode;

use styled_markdown::{render_markdown, Theme};

fn main() -> ExitCode {
    let theme = match std::env::args().nth(1) {
        Some(name) => match Theme::preset(&name) {
            Ok(theme) => theme,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Theme::base(),
    };

    let mut markdown = String::new();
    io::stdin().read_to_string(&mut markdown).expect("read stdin");
    print!("{}", render_markdown(&markdown, &theme));
    ExitCode::SUCCESS
}
