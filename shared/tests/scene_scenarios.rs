//! End-to-end checks of the dataset → scene pipeline.

use std::collections::HashSet;

use treemap_shared::{ChartConfig, Dataset, DatasetCell, Scene, TooltipState, build_scene, render_cell};

const SAMPLE: &str = include_str!("fixtures/video_game_sample.json");

fn three_leaves() -> Dataset {
    Dataset::from_json(
        r#"{"name": "root", "children": [
            {"name": "Ten", "category": "X", "value": 10},
            {"name": "Twenty", "category": "X", "value": 20},
            {"name": "Thirty", "category": "X", "value": 30}
        ]}"#,
    )
    .unwrap()
}

fn area_of(scene: &Scene, name: &str) -> f64 {
    scene
        .tiles
        .iter()
        .find(|t| t.name == name)
        .map(|t| t.rect.area())
        .unwrap()
}

#[test]
fn three_leaves_in_one_category() {
    let scene = build_scene(&three_leaves(), &ChartConfig::default());
    assert_eq!(scene.tiles.len(), 3);
    assert_eq!(scene.legend.len(), 1);
    assert_eq!(scene.legend[0].category, "X");

    let ten = area_of(&scene, "Ten");
    let twenty = area_of(&scene, "Twenty");
    let thirty = area_of(&scene, "Thirty");
    assert!(ten < twenty, "{ten} !< {twenty}");
    assert!(twenty < thirty, "{twenty} !< {thirty}");
}

#[test]
fn empty_cell_renders_nothing() {
    let scene = render_cell(&DatasetCell::default(), &ChartConfig::default());
    assert!(scene.tiles.is_empty());
    assert!(scene.legend.is_empty());
}

#[test]
fn sample_dataset_renders_every_leaf() {
    let dataset = Dataset::from_json(SAMPLE).unwrap();
    let scene = build_scene(&dataset, &ChartConfig::default());
    assert_eq!(scene.tiles.len(), dataset.leaf_count());
    assert_eq!(scene.tiles.len(), 15);

    let wii_sports = scene.tiles.iter().find(|t| t.name == "Wii Sports").unwrap();
    assert_eq!(wii_sports.category, "Wii");
    assert_eq!(wii_sports.value, 82.53);
    assert_eq!(wii_sports.label, vec!["Wii", "Sports"]);
    // Largest platform and largest game come first.
    assert_eq!(scene.tiles[0].name, "Wii Sports");
}

#[test]
fn legend_lists_each_category_once_in_first_seen_order() {
    let dataset = Dataset::from_json(SAMPLE).unwrap();
    let scene = build_scene(&dataset, &ChartConfig::default());
    let legend: Vec<&str> = scene.legend.iter().map(|e| e.category.as_str()).collect();
    assert_eq!(legend, vec!["Wii", "DS", "NES", "GB", "X360", "PS4"]);

    let tile_categories: HashSet<&str> = scene.tiles.iter().map(|t| t.category.as_str()).collect();
    let legend_categories: HashSet<&str> = legend.iter().copied().collect();
    assert_eq!(tile_categories, legend_categories);
}

#[test]
fn rebuilding_is_idempotent() {
    let dataset = Dataset::from_json(SAMPLE).unwrap();
    let config = ChartConfig::default();
    let first = build_scene(&dataset, &config);
    let second = build_scene(&dataset, &config);
    assert_eq!(first, second);
    assert_eq!(second.tiles.len(), 15);
}

#[test]
fn republishing_the_same_dataset_does_not_accumulate() {
    let config = ChartConfig::default();
    let mut cell = DatasetCell::default();
    cell.publish(Dataset::from_json(SAMPLE).unwrap());
    let before = render_cell(&cell, &config);
    cell.publish(Dataset::from_json(SAMPLE).unwrap());
    let after = render_cell(&cell, &config);
    assert_eq!(before, after);
}

#[test]
fn hovering_a_tile_shows_its_exact_details() {
    let dataset = Dataset::from_json(SAMPLE).unwrap();
    let scene = build_scene(&dataset, &ChartConfig::default());
    let target = scene.tiles.iter().position(|t| t.name == "Tetris").unwrap();
    let rect = scene.tiles[target].rect;
    let (cx, cy) = ((rect.x0 + rect.x1) / 2.0, (rect.y0 + rect.y1) / 2.0);

    let hit = scene.tile_at(cx, cy).unwrap();
    assert_eq!(hit, target);

    let mut tooltip = TooltipState::default();
    tooltip.show(&scene.tiles[hit], cx, cy);
    assert!(tooltip.is_visible());
    let lines = tooltip.content.as_ref().unwrap().lines();
    assert_eq!(lines[0], "Name: Tetris");
    assert_eq!(lines[1], "Category: GB");
    assert_eq!(lines[2], "Value: 30.26");
    assert_eq!(tooltip.data_value().as_deref(), Some("30.26"));

    tooltip.hide();
    assert!(!tooltip.is_visible());
}

#[test]
fn hover_shows_value_text_with_trailing_zero() {
    let dataset = Dataset::from_json(SAMPLE).unwrap();
    let scene = build_scene(&dataset, &ChartConfig::default());
    let tile = scene
        .tiles
        .iter()
        .find(|t| t.name == "New Super Mario Bros.")
        .unwrap();
    assert_eq!(tile.value_text, "29.80");
    assert_eq!(tile.value, 29.8);

    let mut tooltip = TooltipState::default();
    tooltip.show(tile, 0.0, 0.0);
    let lines = tooltip.content.as_ref().unwrap().lines();
    assert_eq!(lines[2], "Value: 29.80");
    assert_eq!(tooltip.data_value().as_deref(), Some("29.80"));
}

#[test]
fn malformed_leaf_is_a_load_error_not_a_scene() {
    let body = r#"{"name": "root", "children": [{"name": "Orphan", "value": "3"}]}"#;
    assert!(Dataset::from_json(body).is_err());
}
