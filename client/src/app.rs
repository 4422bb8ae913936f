use leptos::prelude::*;
use treemap_shared::{DatasetCell, TooltipState};

use crate::chart::TreemapChart;
use crate::colors::rgba_css;
use crate::{config, loader};

#[component]
pub fn App() -> impl IntoView {
    // Global signals
    let cell: RwSignal<DatasetCell> = RwSignal::new(DatasetCell::default());
    let tooltip: RwSignal<TooltipState> = RwSignal::new(TooltipState::default());

    provide_context(cell);
    provide_context(tooltip);

    // One load per mount. The chart stays empty until it lands.
    Effect::new(move |_| loader::load_into(cell, config::DATASET_URL));

    view! {
        <main class="page">
            <TreemapChart />
            <Tooltip />
        </main>
    }
}

#[component]
fn Tooltip() -> impl IntoView {
    let tooltip: RwSignal<TooltipState> = expect_context();

    view! {
        <div
            id="tooltip"
            class="tooltip"
            data-value=move || tooltip.with(|t| t.data_value().unwrap_or_default())
            style:left=move || tooltip.with(|t| format!("{}px", t.left))
            style:top=move || tooltip.with(|t| format!("{}px", t.top))
            style:opacity=move || tooltip.with(|t| t.opacity.to_string())
            style:transition=move || tooltip.with(|t| format!("opacity {}ms", t.transition_ms))
        >
            {move || {
                tooltip.with(|t| {
                    t.content.as_ref().map(|content| {
                        let [name, category, value] = content.lines();
                        view! {
                            <div class="tooltip-accent" style:background={rgba_css(content.fill, 0.85)} />
                            <div class="tooltip-body">
                                <div>{name}</div>
                                <div>{category}</div>
                                <div>{value}</div>
                            </div>
                        }
                    })
                })
            }}
        </div>
    }
}
