use std::io::{self, Write};

pub fn prompt_confirm(prompt: &str, default: Option<bool>) -> io::Result<bool> {
    let mut input = String::new();

    loop {
        input.clear();

        match default {
            Some(true) => print!("{} (Y/n): ", prompt),
            Some(false) | None => print!("{} (y/N): ", prompt),
        }
        io::stdout().flush()?;

        io::stdin().read_line(&mut input)?;

        match input.trim().to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            "" => match default {
                Some(default) => return Ok(default),
                None => continue,
            },
            _ => continue,
        }
    }
}

pub fn prompt_input(prompt: &str) -> io::Result<String> {
    let mut input = String::new();

    print!("{}: ", prompt);
    io::stdout().flush()?;
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

/// Language picker shown before any locale is set, so the menu itself
/// stays bilingual English/Spanish like the original prompt.
pub fn prompt_language() -> io::Result<&'static str> {
    let mut input = String::new();

    loop {
        input.clear();

        println!("Select your preferred language / Selecciona tu idioma preferido:");
        println!("  1) English");
        println!("  2) Español");
        println!("  3) 日本語");
        print!("> ");
        io::stdout().flush()?;

        io::stdin().read_line(&mut input)?;

        match input.trim().to_lowercase().as_str() {
            "1" | "en" | "english" => return Ok("en"),
            "2" | "es" | "español" | "espanol" => return Ok("es"),
            "3" | "ja" | "日本語" => return Ok("ja"),
            _ => continue,
        }
    }
}
