use promptstash_core::view::presenter::{
    render_counts, render_projects, render_prompts, NO_PROJECTS_MESSAGE,
};
use promptstash_core::{
    Container, MemoryKeyValueStore, NodeKind, Placeholder, PromptFilter, PromptStore,
    SlotRepository,
};

fn store() -> PromptStore<MemoryKeyValueStore> {
    PromptStore::load(SlotRepository::new(MemoryKeyValueStore::new()))
}

#[test]
fn prompt_cards_carry_badge_tags_and_stable_ids() {
    let mut store = store();
    let work = store.add_project("Work", "#3B82F6").unwrap();
    let assigned = store
        .add_prompt(
            "Todo",
            "Buy milk",
            vec!["errand".to_string(), "home".to_string()],
            Some(work.id.clone()),
        )
        .unwrap();
    store.add_prompt("Loose", "text", Vec::new(), None).unwrap();

    let mut list = Container::new();
    let mut empty = Placeholder::new("none");
    let rendered = render_prompts(store.snapshot(), &mut list, &mut empty);

    assert_eq!(rendered, 2);
    assert!(!empty.is_visible());
    let cards = list.nodes();
    assert_eq!(cards[0].attr("id"), Some(assigned.id.as_str()));

    let badge = cards[0].child(NodeKind::ProjectBadge).unwrap();
    assert_eq!(badge.text.as_deref(), Some("Work"));
    assert_eq!(badge.attr("color"), Some("#3B82F6"));
    assert!(cards[1].child(NodeKind::ProjectBadge).is_none());

    let tags: Vec<_> = cards[0]
        .descendants(NodeKind::Tag)
        .into_iter()
        .filter_map(|tag| tag.text.as_deref())
        .collect();
    assert_eq!(tags, vec!["errand", "home"]);

    let timestamp = cards[0].child(NodeKind::Timestamp).unwrap();
    assert!(timestamp.text.as_deref().unwrap().starts_with("Added: "));
}

#[test]
fn rerender_replaces_previous_cards() {
    let mut store = store();
    let prompt = store.add_prompt("a", "b", Vec::new(), None).unwrap();
    let mut list = Container::new();
    let mut empty = Placeholder::new("none");
    render_prompts(store.snapshot(), &mut list, &mut empty);
    assert_eq!(list.nodes().len(), 1);

    store.delete_prompt(&prompt.id).unwrap();
    let rendered = render_prompts(store.snapshot(), &mut list, &mut empty);
    assert_eq!(rendered, 0);
    assert!(list.is_empty());
    assert!(empty.is_visible());
}

#[test]
fn empty_filter_result_shows_placeholder() {
    let mut store = store();
    let work = store.add_project("Work", "#3B82F6").unwrap();
    store.add_prompt("a", "b", Vec::new(), None).unwrap();
    store.set_filter(PromptFilter::Project(work.id));

    let mut list = Container::new();
    let mut empty = Placeholder::new("none");
    render_prompts(store.snapshot(), &mut list, &mut empty);
    assert!(list.is_empty());
    assert!(empty.is_visible());
}

#[test]
fn project_list_shows_counts_and_placeholder_when_empty() {
    let mut store = store();
    let mut projects = Container::new();
    render_projects(store.snapshot(), &mut projects);
    assert_eq!(projects.nodes()[0].kind, NodeKind::Placeholder);
    assert_eq!(projects.text(), Some(NO_PROJECTS_MESSAGE));

    let work = store.add_project("Work", "#3B82F6").unwrap();
    store
        .add_prompt("a", "b", Vec::new(), Some(work.id.clone()))
        .unwrap();
    store.add_prompt("c", "d", Vec::new(), None).unwrap();
    render_projects(store.snapshot(), &mut projects);

    let item = &projects.nodes()[0];
    assert_eq!(item.kind, NodeKind::ProjectItem);
    assert_eq!(item.attr("project"), Some(work.id.as_str()));
    assert_eq!(
        item.child(NodeKind::Count).and_then(|n| n.text.as_deref()),
        Some("1")
    );
    assert_eq!(
        item.child(NodeKind::ColorSwatch)
            .and_then(|n| n.attr("color")),
        Some("#3B82F6")
    );
    assert_eq!(
        item.child(NodeKind::DeleteButton).and_then(|n| n.attr("id")),
        Some(work.id.as_str())
    );
}

#[test]
fn count_badges_track_total_and_unassigned() {
    let mut store = store();
    let work = store.add_project("Work", "#3B82F6").unwrap();
    store
        .add_prompt("a", "b", Vec::new(), Some(work.id.clone()))
        .unwrap();
    store.add_prompt("c", "d", Vec::new(), None).unwrap();
    store.add_prompt("e", "f", Vec::new(), None).unwrap();

    let mut all = Container::new();
    let mut unassigned = Container::new();
    render_counts(store.snapshot(), &mut all, &mut unassigned);
    assert_eq!(all.text(), Some("3"));
    assert_eq!(unassigned.text(), Some("2"));
    assert_eq!(all.nodes()[0].attr("active"), Some("true"));
}
