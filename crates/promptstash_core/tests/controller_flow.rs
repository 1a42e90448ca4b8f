use promptstash_core::controller::{PROJECT_FORM_ERROR, PROMPT_FORM_ERROR};
use promptstash_core::{
    Controller, DeleteTarget, KeyValueStore, MemoryKeyValueStore, NodeKind, Outcome, PromptFilter,
    PromptForm, PromptStore, RepoError, RepoResult, SlotRepository, StoreError, UiEvent,
    ValidationError, DEFAULT_PROJECT_COLOR,
};

fn controller() -> Controller<MemoryKeyValueStore> {
    Controller::new(PromptStore::load(SlotRepository::new(
        MemoryKeyValueStore::new(),
    )))
}

fn create_project(controller: &mut Controller<MemoryKeyValueStore>, name: &str) -> String {
    controller.dispatch(UiEvent::OpenProjectForm).unwrap();
    controller.project_form_mut().name = name.to_string();
    assert_eq!(
        controller.dispatch(UiEvent::CreateProject).unwrap(),
        Outcome::Rendered
    );
    controller.store().projects().last().unwrap().id.clone()
}

fn add_prompt(
    controller: &mut Controller<MemoryKeyValueStore>,
    title: &str,
    tags: &str,
    project: &str,
) -> String {
    let form = controller.prompt_form_mut();
    form.title = title.to_string();
    form.content = format!("{title} body");
    form.tags = tags.to_string();
    form.project = project.to_string();
    assert_eq!(
        controller.dispatch(UiEvent::AddPrompt).unwrap(),
        Outcome::Rendered
    );
    controller.store().prompts().last().unwrap().id.clone()
}

#[test]
fn startup_renders_empty_state() {
    let controller = controller();
    let surfaces = controller.surfaces();
    assert!(surfaces.prompts_list.is_empty());
    assert!(surfaces.no_prompts.is_visible());
    assert_eq!(surfaces.all_count.text(), Some("0"));
    assert_eq!(surfaces.unassigned_count.text(), Some("0"));
    assert_eq!(surfaces.project_selector.nodes().len(), 1);
}

#[test]
fn create_project_closes_and_resets_form() {
    let mut controller = controller();
    controller.dispatch(UiEvent::OpenProjectForm).unwrap();
    controller.project_form_mut().name = "Home".to_string();
    controller
        .dispatch(UiEvent::SelectColor("#22C55E".to_string()))
        .unwrap();
    controller.dispatch(UiEvent::CreateProject).unwrap();

    let project = &controller.store().projects()[0];
    assert_eq!(project.color, "#22C55E");
    assert!(!controller.project_form().is_open());
    assert!(controller.project_form().name.is_empty());
    assert_eq!(controller.project_form().color(), DEFAULT_PROJECT_COLOR);
    assert_eq!(controller.surfaces().projects_list.nodes().len(), 1);
    assert_eq!(controller.surfaces().project_selector.nodes().len(), 2);
}

#[test]
fn blank_project_name_keeps_form_open_with_inline_error() {
    let mut controller = controller();
    controller.dispatch(UiEvent::OpenProjectForm).unwrap();
    controller.project_form_mut().name = "   ".to_string();

    let outcome = controller.dispatch(UiEvent::CreateProject).unwrap();
    assert_eq!(
        outcome,
        Outcome::Rejected(ValidationError::EmptyProjectName)
    );
    assert!(controller.project_form().is_open());
    assert!(controller.surfaces().project_form_error.is_visible());
    assert_eq!(
        controller.surfaces().project_form_error.message(),
        PROJECT_FORM_ERROR
    );
    assert!(controller.store().projects().is_empty());
}

#[test]
fn add_prompt_parses_tags_and_clears_form() {
    let mut controller = controller();
    let work = create_project(&mut controller, "Work");
    add_prompt(&mut controller, "Todo", " errand, ,milk ,errand", &work);

    let prompt = &controller.store().prompts()[0];
    assert_eq!(prompt.tags, vec!["errand", "milk", "errand"]);
    assert_eq!(prompt.project_id.as_deref(), Some(work.as_str()));
    assert_eq!(controller.prompt_form(), &PromptForm::default());
    assert!(!controller.surfaces().no_prompts.is_visible());
    assert_eq!(controller.surfaces().all_count.text(), Some("1"));
}

#[test]
fn invalid_prompt_shows_inline_error_until_next_success() {
    let mut controller = controller();
    controller.prompt_form_mut().title = "A".to_string();

    let outcome = controller.dispatch(UiEvent::AddPrompt).unwrap();
    assert_eq!(outcome, Outcome::Rejected(ValidationError::EmptyContent));
    assert_eq!(
        controller.surfaces().prompt_form_error.message(),
        PROMPT_FORM_ERROR
    );
    assert!(controller.store().prompts().is_empty());
    assert_eq!(controller.prompt_form().title, "A");

    controller.prompt_form_mut().content = "now valid".to_string();
    controller.dispatch(UiEvent::AddPrompt).unwrap();
    assert!(!controller.surfaces().prompt_form_error.is_visible());
    assert_eq!(controller.store().prompts().len(), 1);
}

#[test]
fn project_delete_needs_confirmation_and_names_affected_prompts() {
    let mut controller = controller();
    let work = create_project(&mut controller, "Work");
    add_prompt(&mut controller, "one", "", &work);
    add_prompt(&mut controller, "two", "", &work);

    let outcome = controller
        .dispatch(UiEvent::RequestDeleteProject(work.clone()))
        .unwrap();
    assert_eq!(outcome, Outcome::Staged);
    assert_eq!(
        controller.pending_delete(),
        Some(&DeleteTarget::Project(work.clone()))
    );
    assert!(controller.surfaces().delete_dialog.is_visible());
    assert_eq!(
        controller.surfaces().delete_dialog.message(),
        "Are you sure you want to delete \"Work\"? This will also unassign 2 prompt(s) from this project."
    );
    assert_eq!(controller.store().projects().len(), 1);

    assert_eq!(
        controller.dispatch(UiEvent::ConfirmDelete).unwrap(),
        Outcome::Rendered
    );
    assert!(controller.store().projects().is_empty());
    assert_eq!(controller.store().unassigned_count(), 2);
    assert!(!controller.surfaces().delete_dialog.is_visible());
    assert_eq!(controller.surfaces().unassigned_count.text(), Some("2"));
}

#[test]
fn cancel_delete_performs_no_mutation() {
    let mut controller = controller();
    let prompt_id = add_prompt(&mut controller, "keep", "", "");

    controller
        .dispatch(UiEvent::RequestDeletePrompt(prompt_id.clone()))
        .unwrap();
    assert_eq!(
        controller.dispatch(UiEvent::CancelDelete).unwrap(),
        Outcome::Cancelled
    );
    assert_eq!(controller.pending_delete(), None);
    assert_eq!(
        controller.dispatch(UiEvent::ConfirmDelete).unwrap(),
        Outcome::Ignored
    );
    assert!(controller.store().find_prompt(&prompt_id).is_some());
}

#[test]
fn prompt_delete_targets_stable_id_under_filter() {
    let mut controller = controller();
    let work = create_project(&mut controller, "Work");
    let loose = add_prompt(&mut controller, "loose", "", "");
    let assigned = add_prompt(&mut controller, "assigned", "", &work);

    controller
        .dispatch(UiEvent::SelectFilter(work.clone()))
        .unwrap();
    let card_id = controller.surfaces().prompts_list.nodes()[0]
        .child(NodeKind::DeleteButton)
        .and_then(|button| button.attr("id"))
        .unwrap()
        .to_string();
    assert_eq!(card_id, assigned);

    controller
        .dispatch(UiEvent::RequestDeletePrompt(card_id))
        .unwrap();
    controller.dispatch(UiEvent::ConfirmDelete).unwrap();

    let remaining: Vec<&str> = controller
        .store()
        .prompts()
        .iter()
        .map(|prompt| prompt.id.as_str())
        .collect();
    assert_eq!(remaining, vec![loose.as_str()]);
    assert!(controller.surfaces().no_prompts.is_visible());
}

#[test]
fn unknown_delete_request_stages_nothing() {
    let mut controller = controller();
    let outcome = controller
        .dispatch(UiEvent::RequestDeleteProject("missing".to_string()))
        .unwrap();
    assert_eq!(outcome, Outcome::Ignored);
    assert_eq!(controller.pending_delete(), None);
    assert!(!controller.surfaces().delete_dialog.is_visible());
}

#[test]
fn selecting_filter_updates_header_and_active_marker() {
    let mut controller = controller();
    let work = create_project(&mut controller, "Work");
    add_prompt(&mut controller, "one", "", &work);
    add_prompt(&mut controller, "two", "", "");

    controller
        .dispatch(UiEvent::SelectFilter(work.clone()))
        .unwrap();
    let surfaces = controller.surfaces();
    assert_eq!(surfaces.current_title.text(), Some("Work"));
    assert_eq!(surfaces.current_count.text(), Some("1 prompts"));
    assert_eq!(
        surfaces.projects_list.nodes()[0].attr("active"),
        Some("true")
    );
    assert_eq!(surfaces.prompts_list.nodes().len(), 1);

    controller
        .dispatch(UiEvent::SelectFilter("unassigned".to_string()))
        .unwrap();
    let surfaces = controller.surfaces();
    assert_eq!(surfaces.current_title.text(), Some("Unassigned"));
    assert_eq!(surfaces.projects_list.nodes()[0].attr("active"), None);
    assert_eq!(
        surfaces.unassigned_count.nodes()[0].attr("active"),
        Some("true")
    );
}

#[test]
fn deleting_viewed_project_returns_to_all_prompts() {
    let mut controller = controller();
    let work = create_project(&mut controller, "Work");
    add_prompt(&mut controller, "one", "", &work);
    add_prompt(&mut controller, "two", "", "");
    controller
        .dispatch(UiEvent::SelectFilter(work.clone()))
        .unwrap();

    controller
        .dispatch(UiEvent::RequestDeleteProject(work))
        .unwrap();
    controller.dispatch(UiEvent::ConfirmDelete).unwrap();

    assert_eq!(controller.store().filter(), &PromptFilter::All);
    assert_eq!(controller.surfaces().current_title.text(), Some("All Prompts"));
    assert_eq!(controller.surfaces().prompts_list.nodes().len(), 2);
}

#[test]
fn shutdown_flushes_state_for_next_session() {
    let mut controller = controller();
    add_prompt(&mut controller, "persisted", "a,b", "");

    let slots = controller.shutdown().unwrap();
    let next = Controller::new(PromptStore::load(slots));
    assert_eq!(next.store().prompts().len(), 1);
    assert_eq!(next.surfaces().prompts_list.nodes().len(), 1);
}

/// Backend that reads as empty and refuses every write.
struct RejectingStore;

impl KeyValueStore for RejectingStore {
    fn get_item(&self, _key: &str) -> RepoResult<Option<String>> {
        Ok(None)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> RepoResult<()> {
        Err(RepoError::MissingRequiredTable("kv_slots"))
    }
}

#[test]
fn failed_write_still_renders_new_prompt_and_keeps_form() {
    let mut controller = Controller::new(PromptStore::load(SlotRepository::new(RejectingStore)));
    let form = controller.prompt_form_mut();
    form.title = "Draft".to_string();
    form.content = "body".to_string();
    form.tags = "a, b".to_string();

    let err = controller.dispatch(UiEvent::AddPrompt).unwrap_err();

    assert!(matches!(err, StoreError::Repo(_)));
    assert_eq!(controller.store().prompts().len(), 1);
    let surfaces = controller.surfaces();
    assert_eq!(surfaces.all_count.text(), Some("1"));
    assert_eq!(surfaces.prompts_list.nodes().len(), 1);
    assert!(!surfaces.no_prompts.is_visible());
    assert!(!surfaces.prompt_form_error.is_visible());
    assert_eq!(controller.prompt_form().title, "Draft");
    assert_eq!(controller.prompt_form().tags, "a, b");
}
