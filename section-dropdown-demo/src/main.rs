mod paths;

use std::fs::{self, File};

use futures::StreamExt;
use section_dropdown::{
    DropdownConfig, Event, Item, Key, ListPosition, Rect, Section, SectionDropdown, Style,
    Terminal, TextRun, event_stream,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const TRIGGER_WIDTH: u16 = 24;
const TRIGGER_HEIGHT: u16 = 3;

/// Which dropdowns to show.
#[derive(Debug, Clone, Copy)]
struct Options {
    bottom: bool,
    top: bool,
}

impl Options {
    fn from_args() -> Self {
        let mut options = Options {
            bottom: true,
            top: true,
        };
        for arg in std::env::args().skip(1) {
            match arg.as_str() {
                "--top-only" => options.bottom = false,
                "--bottom-only" => options.top = false,
                other => eprintln!("ignoring unknown argument '{other}'"),
            }
        }
        options
    }
}

fn sample_sections() -> Vec<Section<u32>> {
    (0..2)
        .map(|i| {
            let group_id = format!("section-{i}");
            Section::new(&group_id, format!("Section {}", i + 1)).items(
                (1..=5).map(|j| Item::new(format!("Item {j}"), j, &group_id)),
            )
        })
        .collect()
}

fn dropdown(id: &str, position: ListPosition) -> SectionDropdown<u32> {
    let id_owned = id.to_string();
    SectionDropdown::new(
        DropdownConfig::new(sample_sections())
            .id(id)
            .list_position(position)
            .accessory_right(|| TextRun::new("▼"))
            .item_header_text_style(Style::new().bold())
            .on_selected(move |item| {
                log::info!(
                    "{}: selected {} ({}={})",
                    id_owned,
                    item.label,
                    item.group_id,
                    item.value
                );
            }),
    )
}

fn init_logging() -> std::io::Result<()> {
    let path = paths::log_file();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .map_err(std::io::Error::other)
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_logging()?;
    let options = Options::from_args();
    log::info!("section-dropdown-demo starting with {:?}", options);

    let mut term = Terminal::new()?;
    let mut bottom = dropdown("bottom", ListPosition::Bottom);
    let mut top = dropdown("top", ListPosition::Top);
    let mut events = event_stream();

    loop {
        bottom.apply_pending_scrolls();
        top.apply_pending_scrolls();

        let (width, height) = term.size();
        term.draw(|buf| {
            buf.put_str(1, 0, width, "Click a trigger to open it. q quits.", &Style::new().dim());

            if options.bottom {
                buf.put_str(2, 2, width, "Bottom", &Style::new().bold());
                bottom.paint_trigger(Rect::new(2, 3, TRIGGER_WIDTH, TRIGGER_HEIGHT), buf);
            }
            if options.top {
                let x = width / 2;
                let y = height.saturating_sub(TRIGGER_HEIGHT + 1);
                buf.put_str(x, y.saturating_sub(1), width, "Top", &Style::new().bold());
                top.paint_trigger(Rect::new(x, y, TRIGGER_WIDTH, TRIGGER_HEIGHT), buf);
            }

            // Overlays last so they cover the triggers.
            bottom.paint_overlay(buf);
            top.paint_overlay(buf);
        })?;

        tokio::select! {
            next = events.next() => {
                let Some(event) = next else {
                    return Ok(());
                };
                let event = event?;
                if matches!(event, Event::Key { key: Key::Char('q'), .. })
                    && !bottom.is_open()
                    && !top.is_open()
                {
                    log::info!("section-dropdown-demo exiting");
                    return Ok(());
                }
                // An open overlay takes input before anything else.
                let consumed = (top.is_open() && top.handle_event(&event))
                    || (bottom.is_open() && bottom.handle_event(&event));
                if consumed {
                    continue;
                }
                if options.bottom && bottom.handle_event(&event) {
                    continue;
                }
                if options.top {
                    top.handle_event(&event);
                }
            }
            Some(request) = bottom.next_scroll() => {
                bottom.apply_scroll(request);
            }
            Some(request) = top.next_scroll() => {
                top.apply_scroll(request);
            }
        }
    }
}
