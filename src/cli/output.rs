use std::io;

use crossterm::{
    execute,
    style::{Print, ResetColor, SetForegroundColor},
};

use super::theme::Theme;
use crate::model::ModelMetadata;

pub fn print_model_info(metadata: &ModelMetadata) {
    let mut stdout = io::stdout();

    let rows = [
        ("Model:  ", metadata.name.clone()),
        ("Arch:   ", metadata.architecture.clone()),
        ("Size:   ", format_size(metadata.weight_bytes)),
        ("Params: ", format_count(metadata.num_params)),
        (
            "Layers: ",
            format!("{} (dim: {})", metadata.n_layer, metadata.n_embd),
        ),
        ("Vocab:  ", format_count(metadata.vocab_size)),
        (
            "Context:",
            format!("{} tokens", format_count(metadata.context_length)),
        ),
    ];

    for (i, (label, value)) in rows.iter().enumerate() {
        let branch = if i + 1 == rows.len() {
            "  └─ "
        } else {
            "  ├─ "
        };
        execute!(
            stdout,
            SetForegroundColor(Theme::IRON_GRAY),
            Print(branch),
            ResetColor,
            Print(format!("{} ", label)),
            SetForegroundColor(Theme::TEXT_SECONDARY),
            Print(value),
            ResetColor,
            Print("\n")
        )
        .ok();
    }

    execute!(stdout, Print("\n")).ok();
}

pub fn format_size(size: u64) -> String {
    if size < 1_000 {
        format!("{}B", size)
    } else if size < 1_000_000 {
        format!("{:.1}KB", size as f64 / 1e3)
    } else if size < 1_000_000_000 {
        format!("{:.1}MB", size as f64 / 1e6)
    } else {
        format!("{:.1}GB", size as f64 / 1e9)
    }
}

pub fn format_count(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1e9)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1e6)
    } else if n >= 1_000 {
        format!("{:.0}K", n as f64 / 1e3)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512B");
        assert_eq!(format_size(2_500), "2.5KB");
        assert_eq!(format_size(3_400_000), "3.4MB");
        assert_eq!(format_size(1_200_000_000), "1.2GB");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(32_768), "33K");
        assert_eq!(format_count(494_032_768), "494.0M");
        assert_eq!(format_count(7_000_000_000), "7.0B");
    }
}
