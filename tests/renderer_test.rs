use kiln::options::PlaceholderContext;
use kiln::renderer::{MiniJinjaRenderer, TemplateRenderer};

fn context() -> PlaceholderContext {
    PlaceholderContext { package_id: "x".to_string(), author: "y".to_string() }
}

#[test]
fn test_render_known_placeholders() {
    let renderer = MiniJinjaRenderer::new();
    let result = renderer
        .render_placeholders(r#"{"name": "{{packageId}}", "author": "{{ author }}"}"#, &context())
        .unwrap();
    assert_eq!(result, r#"{"name": "x", "author": "y"}"#);
}

#[test]
fn test_unknown_placeholders_render_empty() {
    let renderer = MiniJinjaRenderer::new();
    let result = renderer.render_placeholders("[{{version}}][{{repo.url}}]", &context()).unwrap();
    assert_eq!(result, "[][]");
}

#[test]
fn test_text_without_placeholders_is_unchanged() {
    let renderer = MiniJinjaRenderer::new();
    let text = "# Title\n\nplain text, braces { } and $VARS\n";
    assert_eq!(renderer.render_placeholders(text, &context()).unwrap(), text);
}

#[test]
fn test_render_is_idempotent() {
    let renderer = MiniJinjaRenderer::new();
    let once = renderer
        .render_placeholders("id={{packageId}}\nby={{author}}\n", &context())
        .unwrap();
    let twice = renderer.render_placeholders(&once, &context()).unwrap();
    assert_eq!(once, "id=x\nby=y\n");
    assert_eq!(once, twice);
}

#[test]
fn test_render_json_context() {
    let renderer = MiniJinjaRenderer::new();
    let context = serde_json::json!({"packageId": "@scope/pkg"});
    assert_eq!(renderer.render("{{ packageId }}", &context).unwrap(), "@scope/pkg");
}

#[test]
fn test_jinja_block_and_comment_syntax_is_plain_text() {
    let renderer = MiniJinjaRenderer::new();
    for text in [
        "color: {#fff}\n",
        "100{%\n",
        "{% raw %} keep\n",
        "a {# b #} c\n",
        "{% if x %}yes{% endif %}\n",
        "unclosed {{ packageId \n",
    ] {
        assert_eq!(renderer.render_placeholders(text, &context()).unwrap(), text);
    }
}

#[test]
fn test_jinja_syntax_next_to_placeholders() {
    let renderer = MiniJinjaRenderer::new();
    let result = renderer
        .render_placeholders("{% raw %}{{packageId}}{# by #}{{ author }}\n", &context())
        .unwrap();
    assert_eq!(result, "{% raw %}x{# by #}y\n");
}

#[test]
fn test_unparsable_placeholder_is_kept() {
    let renderer = MiniJinjaRenderer::new();
    let text = "{{{packageId}}} {{ author ) }}";
    let result = renderer.render_placeholders(text, &context()).unwrap();
    assert_eq!(result, text);
}
