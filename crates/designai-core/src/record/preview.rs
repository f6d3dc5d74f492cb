//! HTML preview rendering.
//!
//! The preview is a fixed document with the record's metadata substituted in.
//! The template is registered under an `.html` name so minijinja escapes every
//! interpolated value; user text can never inject markup into the preview.

use chrono::{DateTime, Utc};
use minijinja::{Environment, context};

use super::model::Complexity;
use crate::clock::display_time;
use crate::error::Result;

const PREVIEW_TEMPLATE_NAME: &str = "preview.html";

const PREVIEW_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Generated Preview</title>
    <style>
      :root {
        --bg: #090d19;
        --line: rgba(148, 163, 184, 0.2);
        --text: #e2e8f0;
      }
      body {
        margin: 0;
        min-height: 100vh;
        background: radial-gradient(circle at 20% 10%, #1d4ed8 0%, #0f172a 45%, #090d19 100%);
        color: var(--text);
        font-family: Inter, system-ui, sans-serif;
        display: grid;
        place-items: center;
      }
      .panel {
        width: min(92%, 980px);
        border: 1px solid var(--line);
        border-radius: 22px;
        background: linear-gradient(135deg, rgba(17, 24, 39, 0.96), rgba(15, 23, 42, 0.92));
        box-shadow: 0 24px 58px rgba(0, 0, 0, 0.45);
        padding: 26px;
      }
      .meta {
        display: flex;
        gap: 10px;
        flex-wrap: wrap;
        margin-bottom: 14px;
      }
      .chip {
        font-size: 12px;
        border-radius: 999px;
        border: 1px solid var(--line);
        padding: 5px 10px;
        color: #cbd5e1;
      }
      h1 {
        margin: 0 0 10px;
        font-size: 28px;
      }
      p {
        margin: 0;
        line-height: 1.55;
        color: #cbd5e1;
      }
      .grid {
        margin-top: 18px;
        display: grid;
        grid-template-columns: repeat(3, minmax(0, 1fr));
        gap: 10px;
      }
      .card {
        border: 1px solid var(--line);
        border-radius: 14px;
        background: rgba(15, 23, 42, 0.7);
        padding: 12px;
      }
      .label {
        font-size: 11px;
        opacity: 0.8;
      }
      .value {
        margin-top: 6px;
        font-size: 15px;
        font-weight: 600;
      }
    </style>
  </head>
  <body>
    <div class="panel">
      <div class="meta">
        <span class="chip">Template: {{ template }}</span>
        <span class="chip">Tone: {{ tone }}</span>
        <span class="chip">Complexity: {{ complexity }}</span>
        <span class="chip">Generated: {{ generated }}</span>
      </div>
      <h1>DesignAI Output</h1>
      <p>{{ prompt }}</p>
      <div class="grid">
        <div class="card">
          <div class="label">User Flow Coverage</div>
          <div class="value">92%</div>
        </div>
        <div class="card">
          <div class="label">Visual Consistency</div>
          <div class="value">A-</div>
        </div>
        <div class="card">
          <div class="label">Export Readiness</div>
          <div class="value">Production</div>
        </div>
      </div>
    </div>
  </body>
</html>
"#;

/// Values substituted into the preview document.
#[derive(Debug, Clone, Copy)]
pub struct PreviewInput<'a> {
    pub prompt: &'a str,
    pub template: &'a str,
    pub tone: &'a str,
    pub complexity: Complexity,
    pub created_at: DateTime<Utc>,
}

/// Renders the preview document for one record.
pub fn render_preview(input: &PreviewInput<'_>) -> Result<String> {
    let mut env = Environment::new();
    env.add_template(PREVIEW_TEMPLATE_NAME, PREVIEW_TEMPLATE)?;

    let html = env.get_template(PREVIEW_TEMPLATE_NAME)?.render(context! {
        prompt => input.prompt,
        template => input.template,
        tone => input.tone,
        complexity => input.complexity.to_string(),
        generated => display_time(input.created_at),
    })?;

    Ok(html)
}

/// Placeholder shown before anything has been generated.
pub fn empty_preview_html(now: DateTime<Utc>) -> Result<String> {
    render_preview(&PreviewInput {
        prompt: "No generation yet. Add a prompt and click Generate.",
        template: "Dashboard",
        tone: "Executive",
        complexity: Complexity::Low,
        created_at: now,
    })
}
