use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::OcrPreset;
use crate::ocr::LanguageOption;
use crate::preprocess::{PreprocessOption, ACCEPTED_EXTENSIONS};

use super::{RenderModel, RenderedImage};

const TITLE: &str = "Snapscribe: Image to Text";

fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/assets/style.css">
</head>
<body>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = TITLE,
        body = body
    )
}

/// Upload form with the option selectors offered under `preset`.
pub fn render_form(preset: OcrPreset) -> String {
    let preprocess_options: String = PreprocessOption::ALL
        .iter()
        .map(|option| format!(r#"<option value="{0}">{0}</option>"#, option.as_str()))
        .collect();

    let language_options: String = LanguageOption::available(preset)
        .iter()
        .map(|lang| {
            format!(
                r#"<option value="{}">{}</option>"#,
                lang.code(),
                lang.label()
            )
        })
        .collect();

    let accept = ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",");

    page(&format!(
        r#"<p>Upload an image containing text or code and extract it with the OCR.space API.</p>
<form method="post" action="/recognize" enctype="multipart/form-data">
<label>Image <input type="file" name="file" accept="{accept}" required></label>
<label>Preprocessing <select name="preprocess">{preprocess_options}</select></label>
<label>Language <select name="language">{language_options}</select></label>
<button type="submit">Extract text</button>
</form>"#
    ))
}

fn image_figure(caption: &str, image: &RenderedImage) -> String {
    format!(
        r#"<figure>
<figcaption>{caption} ({w}&times;{h}, {c} channel{s})</figcaption>
<img src="{src}" alt="{caption}">
</figure>"#,
        caption = caption,
        w = image.width,
        h = image.height,
        c = image.channels,
        s = if image.channels == 1 { "" } else { "s" },
        src = encode_double_quoted_attribute(&image.data_url),
    )
}

/// Result page: extracted text (or the error) followed by both images.
pub fn render_result(model: &RenderModel) -> String {
    let mut body = String::new();

    match (model.text(), model.error()) {
        (Some(text), _) => {
            body.push_str(&format!(
                r#"<section class="text">
<h2>Extracted text</h2>
<textarea readonly rows="16">{}</textarea>
"#,
                encode_text(text)
            ));
            if let Some(script) = model.copy_script() {
                body.push_str(&format!(
                    r#"<button id="copy-button" type="button">Copy to clipboard</button>
<script>
document.getElementById("copy-button").addEventListener("click", function () {{
  {script};
}});
</script>
"#
                ));
            }
            body.push_str("</section>\n");
        }
        (None, Some(message)) => {
            body.push_str(&format!(
                r#"<section class="error" role="alert">Error during OCR: {}</section>
"#,
                encode_text(message)
            ));
        }
        (None, None) => {}
    }

    body.push_str(&format!(
        r#"<section class="images">
<h2>Images</h2>
<p>Preprocessing: {preprocess}. Language: {language}.</p>
{original}
{processed}
</section>
<p><a href="/">Process another image</a></p>"#,
        preprocess = model.preprocess,
        language = encode_text(&model.language),
        original = image_figure("Original image", &model.original),
        processed = image_figure("Processed image", &model.processed),
    ));

    page(&body)
}

/// Page shown when a submission could not be processed at all, e.g. the
/// upload was not a decodable image.
pub fn render_error_page(message: &str) -> String {
    page(&format!(
        r#"<section class="error" role="alert">{}</section>
<p><a href="/">Try again</a></p>"#,
        encode_text(message)
    ))
}
