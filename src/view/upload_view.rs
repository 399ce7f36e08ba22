//! Virtual tree rendering of an upload widget
use crate::model::upload::{abortable, size, UploadModel};
use crate::view::node::{h, s, Element, Node};
use crate::view::options::{ProgressSpecs, RenderOptions};
use crate::view::style::{action_label, status_label, visible, BLOCK_STYLE, LAST_BLOCK_STYLE, UPLOAD_STYLE};

/// Renders the whole widget for `model`
pub fn view(options: &RenderOptions, model: &UploadModel) -> Node {
    let specs = options.progress_specs();

    h("div")
        .attr("class", format!("upload {}", model.status))
        .style(&UPLOAD_STYLE)
        .child(h("div.title").style(&BLOCK_STYLE).child(render_title(model)))
        .child(h("div.size").style(&BLOCK_STYLE).child(size(model).to_string()))
        .child(h("div.progress").style(&BLOCK_STYLE).child(render_progress(model, specs)))
        .child(h("div.status").style(&BLOCK_STYLE).child(render_status(model)))
        .child(h("div.abort").style(&LAST_BLOCK_STYLE).child(render_abort(model)))
        .into()
}

/// Width of the filled part of the bar, 0 when there is no progress data
pub fn bar_width(model: &UploadModel, specs: ProgressSpecs) -> f64 {
    model.percent_progress().unwrap_or(0.0) * f64::from(specs.width)
}

fn render_title(model: &UploadModel) -> Element {
    match &model.url {
        Some(url) => h("a")
            .attr("href", url)
            .attr("target", "_blank")
            .child(model.title.as_str()),
        None => h("span").child(model.title.as_str()),
    }
}

fn render_progress(model: &UploadModel, specs: ProgressSpecs) -> Element {
    let barwidth = bar_width(model, specs);

    let rect = s("rect")
        .attr("height", specs.height)
        .attr("width", barwidth)
        .attr("class", "bar");

    let line = s("line")
        .attr("x1", specs.width)
        .attr("x2", specs.width)
        .attr("y1", 0)
        .attr("y2", specs.height)
        .attr("class", "end");

    let group = if barwidth > 0.0 {
        s("g").child(rect).child(line)
    } else {
        s("g")
    };

    s("svg")
        .attr("width", specs.width)
        .attr("height", specs.height)
        .child(group)
}

fn render_status(model: &UploadModel) -> Element {
    h("span").text(status_label(model.status))
}

fn render_abort(model: &UploadModel) -> Element {
    let mut style = visible(abortable(model));
    style.insert("cursor", "pointer".to_string());
    h("a")
        .style(&style)
        .on("click", model.abort.clone())
        .text(action_label("abort"))
}
