use leptos::prelude::*;
use treemap_shared::{
    Caption, ChartConfig, DatasetCell, LegendEntry, Scene, Tile, TooltipState, render_cell,
};

/// Fixed-size SVG treemap. Rebuilt wholesale from the dataset cell, so a new
/// dataset replaces every tile and legend entry instead of adding to them.
#[component]
pub fn TreemapChart(#[prop(optional)] config: Option<ChartConfig>) -> impl IntoView {
    let cell: RwSignal<DatasetCell> = expect_context();
    let tooltip: RwSignal<TooltipState> = expect_context();
    let config = StoredValue::new(config.unwrap_or_default());

    let scene = Memo::new(move |_| cell.with(|c| config.with_value(|cfg| render_cell(c, cfg))));

    view! {
        {move || {
            let current = scene.get();
            let tiles = config.with_value(|cfg| {
                current
                    .tiles
                    .iter()
                    .enumerate()
                    .map(|(index, tile)| tile_view(index, tile, cfg, scene, tooltip))
                    .collect_view()
            });
            let legend = current.legend.iter().map(legend_view).collect_view();
            view! {
                <svg
                    id="chart"
                    class="treemap"
                    width={num(current.width)}
                    height={num(current.height)}
                >
                    {caption_view(&current.title)}
                    {caption_view(&current.description)}
                    <g class="tiles">{tiles}</g>
                    <g id="legend">{legend}</g>
                </svg>
            }
        }}
    }
}

fn caption_view(caption: &Caption) -> impl IntoView + use<> {
    view! {
        <text id={caption.id} class="caption" x={num(caption.x)} y={num(caption.y)}>
            {caption.text.clone()}
        </text>
    }
}

fn tile_view(
    index: usize,
    tile: &Tile,
    config: &ChartConfig,
    scene: Memo<Scene>,
    tooltip: RwSignal<TooltipState>,
) -> impl IntoView + use<> {
    let rect = tile.rect;

    let on_enter = move |ev: web_sys::MouseEvent| {
        // Read the tile back from the memo so the handler holds no scene data.
        let Some(hit) = scene.with_untracked(|s| s.tiles.get(index).cloned()) else {
            return;
        };
        tooltip.update(|t| t.show(&hit, ev.page_x() as f64, ev.page_y() as f64));
    };
    let on_move = move |ev: web_sys::MouseEvent| {
        tooltip.update(|t| t.follow(ev.page_x() as f64, ev.page_y() as f64));
    };
    let on_leave = move |_: web_sys::MouseEvent| tooltip.update(TooltipState::hide);

    let lines = tile
        .label_lines(config)
        .into_iter()
        .map(|(x, y, line)| {
            view! { <tspan x={num(x)} y={num(y)}>{line.to_string()}</tspan> }
        })
        .collect_view();

    view! {
        <g class="cell">
            <rect
                class="tile"
                x={num(rect.x0)}
                y={num(rect.y0)}
                width={num(rect.width())}
                height={num(rect.height())}
                fill={tile.fill.css()}
                data-name={tile.name.clone()}
                data-category={tile.category.clone()}
                data-value={tile.value_text.clone()}
                on:mouseenter=on_enter
                on:mousemove=on_move
                on:mouseleave=on_leave
            />
            <text class="tile-label" fill={tile.label_color.css()} font-size={num(config.label_font_px)}>
                {lines}
            </text>
        </g>
    }
}

fn legend_view(entry: &LegendEntry) -> impl IntoView + use<> {
    let size = entry.swatch_size;
    view! {
        <g class="legend" data-category={entry.category.clone()}>
            <rect
                class="legend-item"
                x={num(entry.x)}
                y={num(entry.y)}
                width={num(size)}
                height={num(size)}
                fill={entry.fill.css()}
                data-category={entry.category.clone()}
            />
            <text class="legend-label" x={num(entry.x + size + 4.0)} y={num(entry.y + size - 4.0)}>
                {entry.category.clone()}
            </text>
        </g>
    }
}

/// SVG attribute text for a coordinate; whole numbers print without a fraction.
fn num(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v:.3}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use treemap_shared::Rgb;

    fn swatch_tag(html: &str) -> &str {
        let start = html.find("<rect").unwrap();
        let end = start + html[start..].find('>').unwrap();
        &html[start..end]
    }

    #[test]
    fn legend_swatch_carries_its_category() {
        let entry = LegendEntry {
            category: "X360".to_string(),
            fill: Rgb(141, 211, 199),
            x: 0.0,
            y: 620.0,
            swatch_size: 18.0,
        };
        let html = legend_view(&entry).to_html();
        let swatch = swatch_tag(&html);
        assert!(swatch.contains(r#"class="legend-item""#), "{swatch}");
        assert!(swatch.contains(r#"data-category="X360""#), "{swatch}");
        assert!(swatch.contains(r##"fill="#8dd3c7""##), "{swatch}");
    }

    #[test]
    fn num_drops_needless_fraction() {
        assert_eq!(num(1000.0), "1000");
        assert_eq!(num(60.5), "60.5");
        assert_eq!(num(12.0004), "12");
        assert_eq!(num(-3.25), "-3.25");
    }
}
