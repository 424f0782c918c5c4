//! Server-side rendering of the seek-bar fragment.
//!
//! The labels are pre-filled with the same formatter the input handler uses,
//! so the first paint matches what the handler writes once the user drags.

use crate::config::{
    is_attribute_name, SeekBarConfig, DEFAULT_CONTAINER_SELECTOR, DEFAULT_DURATION_ATTRIBUTE,
};
use crate::ui_time::format_clock;

/// Player position as known when the page is generated. Unknown values
/// render as empty labels/attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeekBarState {
    pub time_pos: Option<f64>,
    pub duration: Option<f64>,
    pub percent_pos: Option<f64>,
}

impl SeekBarState {
    pub fn time_remaining(&self) -> Option<f64> {
        Some(self.duration? - self.time_pos?)
    }
}

pub fn render_seek_bar(state: &SeekBarState, cfg: &SeekBarConfig) -> String {
    let policy = cfg.display.clock_policy;
    let label = |secs: Option<f64>| secs.map(|s| format_clock(s, policy)).unwrap_or_default();
    let number = |n: Option<f64>| n.map(|n| n.to_string()).unwrap_or_default();

    let class = cfg.container_class().unwrap_or_else(|| {
        log::debug!(
            "Container selector {:?} is not a plain class, rendering default",
            cfg.selectors.container
        );
        &DEFAULT_CONTAINER_SELECTOR[1..]
    });

    let duration_attribute = cfg.control.duration_attribute.as_str();
    let duration_attribute = if is_attribute_name(duration_attribute) {
        duration_attribute
    } else {
        log::warn!("Invalid duration attribute {duration_attribute:?}, rendering default");
        DEFAULT_DURATION_ATTRIBUTE
    };

    format!(
        concat!(
            r#"<form class="grid {}"><span>{}</span>"#,
            r#"<input name="seek" type="range" onchange="this.form.submit()" "#,
            r#"oninput="updateSeekTimes(this)" {}="{}" value="{}">"#,
            "<span>{}</span></form>"
        ),
        class,
        label(state.time_pos),
        duration_attribute,
        number(state.duration),
        number(state.percent_pos),
        label(state.time_remaining()),
    )
}
