use crate::dataset::MovieStat;

pub const NO_RECOMMENDATIONS: &str = "No recommendations found for this genre.";

/// What the page shows below the form.
pub enum Outcome<'a> {
    /// No genre submitted yet.
    Idle,
    Results { limit: usize, items: &'a [MovieStat] },
}

pub fn render_page(genres: &[String], selected: Option<&str>, outcome: Outcome<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Genre-Based Movie Recommender</title>
    <style>{css}</style>
</head>
<body>
    <main class="container">
        <h1>&#127916; Genre-Based Movie Recommender</h1>
        <p>Pick a genre to discover the top-rated movies based on viewer ratings.</p>
        {form}
        {results}
    </main>
</body>
</html>"#,
        css = inline_css(),
        form = render_form(genres, selected),
        results = render_outcome(outcome),
    )
}

fn render_form(genres: &[String], selected: Option<&str>) -> String {
    let options: String = genres
        .iter()
        .map(|g| {
            let sel = if Some(g.as_str()) == selected { " selected" } else { "" };
            format!(
                r#"<option value="{value}"{sel}>{label}</option>"#,
                value = html_escape(g),
                label = html_escape(g),
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    format!(
        r#"<form method="get" action="/">
            <label for="genre">&#127917; Select a Genre</label>
            <select id="genre" name="genre">
                {options}
            </select>
            <button type="submit">&#127909; Get Recommendations</button>
        </form>"#
    )
}

fn render_outcome(outcome: Outcome<'_>) -> String {
    match outcome {
        Outcome::Idle => String::new(),
        Outcome::Results { items, .. } if items.is_empty() => {
            format!(r#"<div class="warning">{}</div>"#, NO_RECOMMENDATIONS)
        }
        Outcome::Results { limit, items } => {
            let rows: String = items
                .iter()
                .map(|stat| {
                    format!(
                        r#"<li><strong>{title}</strong><br>&#11088; {avg:.2} &mdash; {count} ratings</li>"#,
                        title = html_escape(&stat.title),
                        avg = stat.avg_rating,
                        count = stat.rating_count,
                    )
                })
                .collect::<Vec<_>>()
                .join("\n            ");
            format!(
                r#"<section class="results">
        <h2>&#11088; Top {limit} Movies</h2>
        <ol>
            {rows}
        </ol>
        </section>"#
            )
        }
    }
}

fn inline_css() -> &'static str {
    r#"
body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #111827;
    background: #ffffff;
}
.container {
    max-width: 720px;
    margin: 0 auto;
    padding: 2rem;
}
form {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    margin: 1.5rem 0;
}
select, button {
    font-size: 1rem;
    padding: 0.4rem;
}
button {
    align-self: flex-start;
    cursor: pointer;
}
.warning {
    background: #fef3c7;
    border: 1px solid #f59e0b;
    border-radius: 4px;
    padding: 0.75rem 1rem;
}
.results li {
    margin-bottom: 0.75rem;
}
"#
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
