//! Resolution behaviour across a whole unit
//!
//! These tests drive the renderer the way an emitter does: declare the
//! unit's top-level names, open scopes, resolve references in emission
//! order, then render the import header.

use std::collections::HashMap;

use crossname_codegen::{sanitize, NamingEnvironment, Renderer};
use crossname_core::InteropConfig;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn imports(renderer: &Renderer<'_>) -> Vec<String> {
    renderer
        .import_sources()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_co_declared_buttons_get_distinct_names() {
    init_tracing();
    let config = InteropConfig::default();
    let mut env =
        NamingEnvironment::new("ui/Buttons.kt").with_top_level(["widget.Button", "gadget.Button"]);
    let mut renderer = Renderer::new(&mut env, &config);

    assert_eq!(renderer.resolve("widget.Button"), "Button");
    assert_eq!(renderer.resolve("gadget.Button"), "gadget_Button");
    assert_eq!(renderer.resolve("widget.Button"), "Button");
    assert_eq!(renderer.resolve("gadget.Button"), "gadget_Button");

    assert_eq!(
        imports(&renderer),
        vec!["import gadget.Button as gadget_Button"]
    );
}

#[test]
fn test_jbox2d_body_unit() {
    init_tracing();
    let config = InteropConfig::default();
    let mut env = NamingEnvironment::new("org/jbox2d/dynamics/Body.kt")
        .with_top_level(["org.jbox2d.dynamics.Body"]);
    let mut renderer = Renderer::new(&mut env, &config);

    // Field types
    assert_eq!(renderer.resolve("org.jbox2d.common.Transform").as_str(), "Transform");
    assert_eq!(renderer.resolve("org.jbox2d.common.Vec2").as_str(), "Vec2");
    assert_eq!(renderer.resolve("org.jbox2d.dynamics.World").as_str(), "World");

    // A method with a parameter named like an imported type
    renderer.environment_mut().enter_scope();
    renderer.environment_mut().bind_local("World");
    assert_eq!(
        renderer.simple_name_source("org.jbox2d.dynamics.World").to_string(),
        "org_jbox2d_dynamics_World"
    );
    assert_eq!(renderer.resolve("org.jbox2d.dynamics.Body"), "Body");
    renderer.environment_mut().exit_scope();

    // Back outside the method the bare name is usable again
    assert_eq!(renderer.resolve("org.jbox2d.dynamics.World"), "World");
    // A second Vec2 from another library collides with the first
    assert_eq!(
        renderer.resolve("org.joml.Vec2").as_str(),
        "org_joml_Vec2"
    );

    assert_eq!(
        imports(&renderer),
        vec![
            "import org.jbox2d.common.Transform",
            "import org.jbox2d.common.Vec2",
            "import org.jbox2d.dynamics.World",
            "import org.jbox2d.dynamics.World as org_jbox2d_dynamics_World",
            "import org.joml.Vec2 as org_joml_Vec2",
        ]
    );

    let stats = renderer.environment().stats();
    assert_eq!(stats.bare_count, 3);
    assert_eq!(stats.aliased_count, 2);
    assert_eq!(stats.top_level_count, 1);
}

#[test]
fn test_imported_name_cannot_shadow_top_level() {
    init_tracing();
    let config = InteropConfig::default();
    let mut env = NamingEnvironment::new("Shape.kt").with_top_level(["geom.Shape"]);
    let mut renderer = Renderer::new(&mut env, &config);

    // Resolved before the unit's own Shape is ever referenced
    assert_eq!(renderer.resolve("java.awt.Shape"), "java_awt_Shape");
    assert_eq!(renderer.resolve("geom.Shape"), "Shape");
}

#[test]
fn test_keywords_in_rendered_names() {
    init_tracing();
    let config = InteropConfig::default();
    let mut env = NamingEnvironment::new("Keywords.kt");
    let mut renderer = Renderer::new(&mut env, &config);

    assert_eq!(renderer.simple_name_source("pkg.fun.object").to_string(), "`object`");
    assert_eq!(renderer.simple_name_source("pkg.when.init").to_string(), "init__");
    assert_eq!(
        renderer.extension_member_qualified_name_source("kotlin.collections.in").to_string(),
        "`in`"
    );
    assert_eq!(
        renderer.package_name_source("pkg.fun").to_string(),
        "pkg.`fun`"
    );
    assert_eq!(
        imports(&renderer),
        vec![
            "import kotlin.collections.`in`",
            "import pkg.`fun`.`object`",
            "import pkg.`when`.init__",
        ]
    );
}

#[test]
fn test_non_aliased_simple_name_never_allocates() {
    let config = InteropConfig::default();
    let mut env = NamingEnvironment::new("Unit.kt");
    let mut renderer = Renderer::new(&mut env, &config);

    assert_eq!(renderer.non_aliased_simple_name("a.Node"), Some("Node".to_string()));
    assert_eq!(renderer.non_aliased_simple_name("b.Node"), None);
    assert_eq!(
        renderer.top_level_qualified_name_source("b.Node").to_string(),
        "b.Node"
    );
    assert_eq!(imports(&renderer), vec!["import a.Node"]);
}

#[test]
fn test_rendered_names_never_collide_across_sanitization() {
    init_tracing();
    let config = InteropConfig::default();
    let mut env = NamingEnvironment::new("Keywords.kt").with_top_level(["model.object"]);
    let mut renderer = Renderer::new(&mut env, &config);

    let names = ["a.class", "b.class__", "model.object", "c.object", "d.x$y", "e.x___y"];
    let rendered: Vec<String> = names
        .iter()
        .map(|name| renderer.simple_name_source(name).to_string())
        .collect();
    let mut unique = rendered.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), rendered.len(), "rendered: {:?}", rendered);
    assert_eq!(rendered[0], "class__");
    assert_eq!(rendered[2], "`object`");
    assert_eq!(rendered[3], "c_object");
}

/// Segments mixing plain names, keywords, their suffixed forms and `$`
fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ab_]{1,2}",
        prop::sample::select(vec![
            "class", "class__", "object", "in", "init", "init__", "a$", "a___",
        ])
        .prop_map(str::to_string),
    ]
}

fn qualified_name() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..4).prop_map(|segments| segments.join("."))
}

proptest! {
    #[test]
    fn resolution_is_injective_and_idempotent(
        names in prop::collection::vec(qualified_name(), 1..24),
        top_level_count in 0usize..4,
        locals in prop::collection::vec(segment(), 0..3),
    ) {
        let config = InteropConfig::default();
        let top_level: Vec<String> = names.iter().take(top_level_count).cloned().collect();
        let mut env = NamingEnvironment::new("Prop.kt").with_top_level(top_level.clone());
        for local in &locals {
            env.bind_local(local.as_str());
        }
        let mut renderer = Renderer::new(&mut env, &config);

        let mut by_name: HashMap<String, String> = HashMap::new();
        let mut by_result: HashMap<String, String> = HashMap::new();
        for name in names.iter().chain(names.iter()) {
            let rendered = renderer.simple_name_source(name).to_string();
            if let Some(previous) = by_name.get(name) {
                prop_assert_eq!(previous, &rendered);
            }
            if let Some(owner) = by_result.get(&rendered) {
                prop_assert_eq!(owner, name);
            }
            by_name.insert(name.clone(), rendered.clone());
            by_result.insert(rendered, name.clone());
        }

        // Top-level names with a unique rendered simple name and no shadowing stay bare
        let rendered_simple = |name: &str| sanitize(name.rsplit('.').next().unwrap_or(name));
        let local_names: Vec<String> = locals.iter().map(|local| sanitize(local)).collect();
        for name in &top_level {
            let simple = rendered_simple(name.as_str());
            let unique = top_level
                .iter()
                .filter(|other| rendered_simple(other.as_str()) == simple)
                .all(|other| other == name);
            if unique && !local_names.contains(&simple) {
                prop_assert_eq!(by_name.get(name), Some(&simple));
            }
        }
    }
}
