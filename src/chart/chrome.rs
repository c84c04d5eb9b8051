//! Hide-meta mode: strip legend, tooltip, data labels and axis chrome from a finished
//! configuration. Applied after resolution, identically for every chart kind.

use super::Configuration;
use super::types::{AxisLabels, AxisLine, AxisTitle};

fn clear_axis_parts(labels: &mut AxisLabels, border: &mut AxisLine, ticks: &mut AxisLine, title: &mut AxisTitle) {
    labels.show = false;
    border.show = false;
    ticks.show = false;
    title.text = None;
}

/// Compact preview variant of `config`.
pub fn strip_chrome(mut config: Configuration) -> Configuration {
    let opts = &mut config.options;
    opts.legend.show = false;
    opts.tooltip.enabled = false;
    opts.data_labels.enabled = false;

    if let Some(x) = opts.x_axis.as_mut() {
        clear_axis_parts(&mut x.labels, &mut x.axis_border, &mut x.axis_ticks, &mut x.title);
    }
    if let Some(y) = opts.y_axis.as_mut() {
        for axis in y.axes_mut() {
            clear_axis_parts(
                &mut axis.labels,
                &mut axis.axis_border,
                &mut axis.axis_ticks,
                &mut axis.title,
            );
        }
    }
    config
}
