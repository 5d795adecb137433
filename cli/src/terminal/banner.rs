use colored::*;

const BANNER_0: &str = r#"
       ___              __      __             __
  ____/ /_  ______ _   / /_____/ /_____ ______/ /__
 / __  / / / / __ `/  / / ___/ __/ __ `/ ___/ //_/
/ /_/ / /_/ / /_/ /  / (__  ) /_/ /_/ / /__/ ,<
\__,_/\__,_/\__,_/  /_/____/\__/\__,_/\___/_/|_|
"#;

const BANNER_1: &str = r#"
    ┌──────────────┐            ┌──────────────────────┐
    │  192.168.0.1 │ ═════════> │  2002:c0a8:1::       │
    └──────────────┘   2002::   └──────────────────────┘
"#;

pub fn print() {
    let output: ColoredString = match rand::random_range(0..=1u8) {
        0 => BANNER_0.bright_green(),
        _ => BANNER_1.truecolor(255, 165, 0),
    };
    super::print::print(&format!("{}", output));
}
