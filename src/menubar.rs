use std::io::{self, Write};

use crossterm::{cursor, queue, style, terminal};

/// Draw the menu bar on the top row: the title in bold followed by the
/// menu items.
pub fn render_menubar<W: Write>(out: &mut W, title: &str, items: &[&str]) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, 0),
        style::ResetColor,
        terminal::Clear(terminal::ClearType::CurrentLine),
        style::SetAttribute(style::Attribute::Bold),
        style::Print(format!(" {title} ")),
        style::SetAttribute(style::Attribute::Reset),
    )?;
    for item in items {
        queue!(out, style::Print("  "))?;
        print_menu_item(out, item)?;
    }
    out.flush()
}

/// Print one key hint such as `[Esc] quit`: the bracketed key names stand
/// out in bold, the action text around them is dimmed.
pub fn print_menu_item<W: Write>(out: &mut W, item: &str) -> io::Result<()> {
    let mut rest = item;
    while !rest.is_empty() {
        if let Some(open) = rest.find('[') {
            if open > 0 {
                print_dim(out, &rest[..open])?;
            }
            rest = &rest[open..];
            if let Some(close) = rest.find(']') {
                queue!(
                    out,
                    style::SetAttribute(style::Attribute::Bold),
                    style::Print(&rest[..=close]),
                    style::SetAttribute(style::Attribute::Reset),
                )?;
                rest = &rest[close + 1..];
            } else {
                queue!(out, style::Print(rest))?;
                break;
            }
        } else {
            print_dim(out, rest)?;
            break;
        }
    }
    Ok(())
}

fn print_dim<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    queue!(
        out,
        style::SetAttribute(style::Attribute::Dim),
        style::Print(text),
        style::SetAttribute(style::Attribute::Reset),
    )
}
