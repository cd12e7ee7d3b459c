//! Integration tests for rendering scaffold controllers.
//!
//! These tests verify the complete flow of loading configuration,
//! resolving an adapter from the built-in registry and rendering every
//! controller action through it.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use actionorm_application::{
    AdapterRegistry, ApplicationError, EmitControllerAction, EmitControllerActionInput, EmitError,
    OrmAdapter, UnimplementedAdapter,
};
use actionorm_domain::{ControllerAction, ModelRef, OrmOperation, ParamsRef, ReceiverRef};
use actionorm_infrastructure::{ConfigRepository, GeneratorConfig, builtin_registry};

fn post_input() -> EmitControllerActionInput {
    GeneratorConfig::default()
        .to_input(Some("Post"))
        .expect("model is given")
}

fn rendered(adapter: &str) -> Vec<(ControllerAction, Vec<String>)> {
    let registry = builtin_registry().expect("built-in ids are unique");
    let use_case = EmitControllerAction::new(registry.get(adapter).unwrap());

    use_case
        .execute_all(&post_input())
        .expect("built-in adapters implement every operation")
        .into_iter()
        .map(|a| (a.action, a.snippets.into_iter().map(|s| s.code).collect()))
        .collect()
}

#[test]
fn test_active_record_scaffold() {
    let expected = vec![
        (ControllerAction::Index, vec!["Post.all"]),
        (ControllerAction::Show, vec!["Post.find(params[:id])"]),
        (ControllerAction::New, vec!["Post.new"]),
        (ControllerAction::Edit, vec!["Post.find(params[:id])"]),
        (
            ControllerAction::Create,
            vec!["Post.new(params[:post])", "@post.save", "@post.errors"],
        ),
        (
            ControllerAction::Update,
            vec![
                "Post.find(params[:id])",
                "@post.update_attributes(params[:post])",
                "@post.errors",
            ],
        ),
        (
            ControllerAction::Destroy,
            vec!["Post.find(params[:id])", "@post.destroy"],
        ),
    ];

    let expected: Vec<_> = expected
        .into_iter()
        .map(|(a, s)| (a, s.into_iter().map(String::from).collect::<Vec<_>>()))
        .collect();
    assert_eq!(rendered("active_record"), expected);
}

#[test]
fn test_data_mapper_differs_only_in_find_and_update() {
    let active_record = rendered("active_record");
    let data_mapper = rendered("data_mapper");

    for ((action, ar), (_, dm)) in active_record.iter().zip(&data_mapper) {
        for (ar_code, dm_code) in ar.iter().zip(dm) {
            let translated = ar_code
                .replace("Post.find(", "Post.get(")
                .replace(".update_attributes(", ".update(");
            assert_eq!(&translated, dm_code, "mismatch in {action}");
        }
    }
}

#[tokio::test]
async fn test_config_selects_adapter() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("generator.yml");
    std::fs::write(
        &path,
        "orm: data_mapper\nmodel: \"Admin::Article\"\nid_params: \"params[:slug]\"\n",
    )
    .expect("Failed to write config");

    let config = ConfigRepository::new().load(&path).await.unwrap();
    let registry = builtin_registry().unwrap();
    let use_case = EmitControllerAction::new(registry.get(&config.orm).unwrap());
    let input = config.to_input(None).unwrap();

    let update = use_case.execute(ControllerAction::Update, &input).unwrap();
    assert_eq!(
        update.get(OrmOperation::Find),
        Some("Admin::Article.get(params[:slug])")
    );
    assert_eq!(
        update.get(OrmOperation::UpdateAttributes),
        Some("@article.update(params[:article])")
    );
}

#[test]
fn test_unknown_adapter_from_config() {
    let registry = builtin_registry().unwrap();
    let err = registry.get("mongoid").err().expect("mongoid is not built in");
    assert_eq!(
        err,
        ApplicationError::UnknownAdapter {
            id: "mongoid".into(),
            available: vec!["active_record".into(), "data_mapper".into()],
        }
    );
}

#[test]
fn test_base_adapter_can_be_registered_and_fails_on_use() {
    let mut registry = AdapterRegistry::new();
    registry.register(UnimplementedAdapter::new()).unwrap();

    let use_case = EmitControllerAction::new(registry.get("unimplemented").unwrap());
    for &action in ControllerAction::all() {
        let err = use_case.execute(action, &post_input()).unwrap_err();
        assert_eq!(
            err,
            ApplicationError::Emit(EmitError::unimplemented(
                "unimplemented",
                action.operations()[0],
            ))
        );
    }
}

#[test]
fn test_emitters_are_independent_across_threads() {
    let adapter: Arc<dyn OrmAdapter> = builtin_registry().unwrap().get("active_record").unwrap();

    let handles: Vec<_> = ["@a", "@b"]
        .into_iter()
        .map(|receiver| {
            let adapter = Arc::clone(&adapter);
            std::thread::spawn(move || {
                let emitter = adapter.create(ReceiverRef::new(receiver));
                (
                    emitter.save().unwrap(),
                    emitter
                        .update_attributes(Some(&ParamsRef::new("params[:x]")))
                        .unwrap(),
                )
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![
            ("@a.save".to_string(), "@a.update_attributes(params[:x])".to_string()),
            ("@b.save".to_string(), "@b.update_attributes(params[:x])".to_string()),
        ]
    );
    assert_eq!(adapter.all(&ModelRef::new("Foo")).unwrap(), "Foo.all");
}
