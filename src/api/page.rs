//! Server-rendered pages

use crate::config::AppConfig;
use crate::render::escape_html;

const STYLE: &str = "body{font-family:sans-serif;max-width:860px;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:1rem;font-weight:bold}\
input,textarea{width:100%;padding:.4rem;box-sizing:border-box}\
button{margin-top:1rem;padding:.5rem 1.5rem}\
details{margin:.5rem 0}";

fn layout(body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
         <title>Reasoning Chain</title><style>{STYLE}</style></head>\
         <body><h1>Reasoning Chain</h1>\
         <p>Prompting an OpenAI-compatible model into an explicit, step-by-step reasoning chain.</p>\
         {body}</body></html>"
    )
}

/// Input form with the configured base URL and model prefilled
pub fn form_page(config: &AppConfig) -> String {
    layout(&format!(
        "<form method=\"post\" action=\"/reason\">\
         <label for=\"api_key\">OpenAI API Key</label>\
         <input type=\"password\" id=\"api_key\" name=\"api_key\">\
         <label for=\"api_base\">OpenAI API Base URL</label>\
         <input type=\"text\" id=\"api_base\" name=\"api_base\" value=\"{}\">\
         <label for=\"model\">Model Name</label>\
         <input type=\"text\" id=\"model\" name=\"model\" value=\"{}\">\
         <label for=\"query\">Enter your query</label>\
         <textarea id=\"query\" name=\"query\" rows=\"2\"></textarea>\
         <button type=\"submit\">Submit</button>\
         </form>",
        escape_html(&config.default_api_base),
        escape_html(&config.default_model),
    ))
}

/// Page around a rendered chain or a plain message
pub fn result_page(body_html: &str) -> String {
    layout(&format!(
        "<section>{body_html}</section><p><a href=\"/\">Ask another question</a></p>"
    ))
}

/// Page showing a plain message such as a validation failure
pub fn message_page(message: &str) -> String {
    result_page(&format!("<p>{}</p>", escape_html(message)))
}
