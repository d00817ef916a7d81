/// UI layer: panels (top bar + filter sidebar) and the three views
/// rendered from the filtered listings (map, bar chart, raw table).
pub mod chart;
pub mod map;
pub mod panels;
pub mod table;
