use std::time::Duration;

use section_dropdown::{
    DropdownConfig, DropdownError, Item, LayoutMap, ListPosition, Rect, ScrollRequest,
    ScrollScheduler, Section, SectionDropdown,
};

fn sample_sections() -> Vec<Section<i32>> {
    (0..2)
        .map(|i| {
            let group_id = format!("s{i}");
            Section::new(&group_id, format!("Section {}", i + 1))
                .items((1..=5).map(|j| Item::new(format!("Item {j}"), j, &group_id)))
        })
        .collect()
}

fn layout() -> LayoutMap {
    let mut layout = LayoutMap::new();
    layout.insert("dd", Rect::new(0, 20, 20, 3));
    layout
}

fn request(group_id: &str, item_index: usize) -> ScrollRequest {
    ScrollRequest {
        group_id: group_id.to_string(),
        item_index,
    }
}

// ============================================================================
// Scheduler
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_request_fires_after_delay() {
    let mut scheduler = ScrollScheduler::new();
    scheduler
        .schedule(request("s1", 2), Duration::from_millis(400))
        .unwrap();
    assert!(scheduler.has_pending());

    tokio::time::sleep(Duration::from_millis(399)).await;
    assert_eq!(scheduler.try_recv(), None);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(scheduler.try_recv(), Some(request("s1", 2)));
    assert!(!scheduler.has_pending());
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_request_never_fires() {
    let mut scheduler = ScrollScheduler::new();
    scheduler
        .schedule(request("s0", 0), Duration::from_millis(400))
        .unwrap();
    scheduler.cancel();
    assert!(!scheduler.has_pending());

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(scheduler.try_recv(), None);
}

#[tokio::test(start_paused = true)]
async fn test_reschedule_replaces_pending() {
    let mut scheduler = ScrollScheduler::new();
    scheduler
        .schedule(request("s0", 0), Duration::from_millis(400))
        .unwrap();
    scheduler
        .schedule(request("s1", 4), Duration::from_millis(400))
        .unwrap();

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(scheduler.try_recv(), Some(request("s1", 4)));
    assert_eq!(scheduler.try_recv(), None);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_discards_already_fired_request() {
    let mut scheduler = ScrollScheduler::new();
    scheduler
        .schedule(request("s1", 4), Duration::from_millis(400))
        .unwrap();
    tokio::time::sleep(Duration::from_millis(450)).await;

    scheduler.cancel();
    assert_eq!(scheduler.try_recv(), None);
}

#[test]
fn test_schedule_without_runtime_fails() {
    let mut scheduler = ScrollScheduler::new();
    assert_eq!(
        scheduler.schedule(request("s0", 0), Duration::from_millis(400)),
        Err(DropdownError::NoRuntime)
    );
    assert!(!scheduler.has_pending());
}

// ============================================================================
// Scroll-to-selected
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_open_scrolls_to_selected_after_delay() {
    let mut dropdown = SectionDropdown::new(
        DropdownConfig::new(sample_sections())
            .id("dd")
            .overlay_height(4)
            .default_value(Item::new("Item 3", 3, "s1")),
    );

    dropdown.open(&layout());
    assert!(dropdown.has_pending_scroll());
    assert_eq!(dropdown.list().map(|l| l.offset()), Some(0));

    let fired = dropdown.next_scroll().await.unwrap();
    assert_eq!(fired, request("s1", 2));
    assert!(dropdown.apply_scroll(fired));

    // Header row 6, then Item 1..3 of s1: Item 3 is row 9.
    assert_eq!(dropdown.list().map(|l| l.offset()), Some(8));
}

#[tokio::test(start_paused = true)]
async fn test_top_list_scrolls_within_reversed_sections() {
    let mut dropdown = SectionDropdown::new(
        DropdownConfig::new(sample_sections())
            .id("dd")
            .list_position(ListPosition::Top)
            .overlay_height(4)
            .default_value(Item::new("Item 2", 2, "s0")),
    );

    dropdown.open(&layout());
    tokio::time::sleep(Duration::from_millis(450)).await;
    assert!(dropdown.apply_pending_scrolls());

    // s0 renders second: its header is row 6 and Item 2 is row 8.
    assert_eq!(dropdown.list().map(|l| l.offset()), Some(8));
}

#[tokio::test(start_paused = true)]
async fn test_configured_delay_is_used() {
    let mut dropdown = SectionDropdown::new(
        DropdownConfig::new(sample_sections())
            .id("dd")
            .scroll_delay(Duration::from_millis(50))
            .default_value(Item::new("Item 1", 1, "s0")),
    );

    dropdown.open(&layout());
    tokio::time::sleep(Duration::from_millis(49)).await;
    assert!(!dropdown.apply_pending_scrolls());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(dropdown.apply_pending_scrolls());
    assert_eq!(dropdown.list().map(|l| l.offset()), Some(1));
}

#[tokio::test(start_paused = true)]
async fn test_close_cancels_pending_scroll() {
    let mut dropdown = SectionDropdown::new(
        DropdownConfig::new(sample_sections())
            .id("dd")
            .default_value(Item::new("Item 5", 5, "s1")),
    );

    dropdown.open(&layout());
    dropdown.close();
    assert!(!dropdown.has_pending_scroll());

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(!dropdown.apply_pending_scrolls());
}

#[tokio::test(start_paused = true)]
async fn test_reopen_ignores_scroll_fired_before_close() {
    let mut dropdown = SectionDropdown::new(
        DropdownConfig::new(sample_sections())
            .id("dd")
            .default_value(Item::new("Item 5", 5, "s1")),
    );
    dropdown.open(&layout());
    // Fires into the channel but is never applied.
    tokio::time::sleep(Duration::from_millis(450)).await;
    dropdown.close();

    dropdown.set_default_value(Some(Item::new("Item 1", 1, "s0")));
    dropdown.open(&layout());
    assert!(!dropdown.apply_pending_scrolls());
    assert_eq!(dropdown.list().map(|l| l.offset()), Some(0));
    assert!(dropdown.has_pending_scroll());

    tokio::time::sleep(Duration::from_millis(450)).await;
    assert!(dropdown.apply_pending_scrolls());
    assert_eq!(dropdown.list().map(|l| l.offset()), Some(1));
}

#[tokio::test(start_paused = true)]
async fn test_new_default_while_open_scrolls_to_it() {
    let mut dropdown = SectionDropdown::new(DropdownConfig::new(sample_sections()).id("dd"));
    dropdown.open(&layout());
    assert!(!dropdown.has_pending_scroll());

    dropdown.set_default_value(Some(Item::new("Item 5", 5, "s1")));
    assert!(dropdown.has_pending_scroll());

    tokio::time::sleep(Duration::from_millis(450)).await;
    assert!(dropdown.apply_pending_scrolls());
    // Twelve rows in a ten-row viewport: clamped to the last page.
    assert_eq!(dropdown.list().map(|l| l.offset()), Some(2));
}

#[tokio::test(start_paused = true)]
async fn test_same_default_while_open_does_not_reschedule() {
    let mut dropdown = SectionDropdown::new(
        DropdownConfig::new(sample_sections())
            .id("dd")
            .default_value(Item::new("Item 5", 5, "s1")),
    );
    dropdown.open(&layout());
    tokio::time::sleep(Duration::from_millis(450)).await;
    assert!(dropdown.apply_pending_scrolls());

    dropdown.set_default_value(Some(Item::new("Item 5", 5, "s1")));
    assert!(!dropdown.has_pending_scroll());
}

#[tokio::test(start_paused = true)]
async fn test_drop_before_delay_is_harmless() {
    let dropdown = {
        let mut dropdown = SectionDropdown::new(
            DropdownConfig::new(sample_sections())
                .id("dd")
                .default_value(Item::new("Item 5", 5, "s1")),
        );
        dropdown.open(&layout());
        dropdown
    };
    drop(dropdown);

    tokio::time::sleep(Duration::from_secs(1)).await;
}

#[tokio::test(start_paused = true)]
async fn test_scroll_to_vanished_section_is_skipped() {
    let mut dropdown = SectionDropdown::new(
        DropdownConfig::new(sample_sections())
            .id("dd")
            .default_value(Item::new("Item 5", 5, "s1")),
    );
    dropdown.open(&layout());
    let fired = dropdown.next_scroll().await.unwrap();

    dropdown.set_data(vec![Section::new("s0", "Section 1").item(Item::new("Item 1", 1, "s0"))]);

    assert!(!dropdown.apply_scroll(fired));
    assert!(dropdown.is_open());
    assert_eq!(dropdown.list().map(|l| l.offset()), Some(0));
}

#[test]
fn test_open_without_runtime_still_opens() {
    let mut dropdown = SectionDropdown::new(
        DropdownConfig::new(sample_sections())
            .id("dd")
            .default_value(Item::new("Item 5", 5, "s1")),
    );
    dropdown.open(&layout());
    assert!(dropdown.is_open());
    assert!(!dropdown.has_pending_scroll());
}
