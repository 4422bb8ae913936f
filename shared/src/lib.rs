pub mod cell;
pub mod colors;
pub mod config;
pub mod dataset;
pub mod hierarchy;
pub mod labels;
pub mod layout;
pub mod legend;
pub mod scene;
pub mod tooltip;

pub use cell::DatasetCell;
pub use colors::{CategorySet, ColorScale, Rgb};
pub use config::ChartConfig;
pub use dataset::{Dataset, DatasetError, RawNode};
pub use hierarchy::{Hierarchy, HierarchyNode, NodeId};
pub use layout::LayoutRect;
pub use scene::{Caption, LegendEntry, Scene, Tile, build_scene, render_cell};
pub use tooltip::{TooltipContent, TooltipState};
