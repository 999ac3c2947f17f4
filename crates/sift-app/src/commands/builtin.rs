//! Built-in `:` commands

use sift_client::SourceOp;
use sift_core::{SortDirection, SourceId};

use super::{CommandFn, CommandRegistry, Invocation};
use crate::filter::{parse_source_type_filter, PriorityFilter};
use crate::handler::{items, overlays, prune, UpdateResult};
use crate::refresh::RefreshKind;
use crate::state::AppState;

/// Register every built-in verb
pub fn register_builtin_commands(reg: &mut CommandRegistry<CommandFn>) {
    reg.register("quit", "", "Exit sift", cmd_quit);
    reg.register("help", "", "Show commands and key bindings", cmd_help);
    reg.register("refresh", "", "Reload content", cmd_refresh);
    reg.register("sources", "", "Open the source manager", cmd_sources);

    reg.register("mark", "[read|unread]", "Set or toggle read state", cmd_mark);
    reg.register("favorite", "", "Toggle favorite", cmd_favorite);
    reg.register("open", "", "Open the item in the browser", cmd_open);
    reg.register("yank", "", "Copy the item URL", cmd_yank);
    reg.register("copy", "", "Copy the item text", cmd_copy);
    reg.register(
        "pattern",
        "<name>",
        "Run the pattern tool on the item and copy its output",
        cmd_pattern,
    );

    reg.register(
        "prune",
        "[days|Nd]",
        "Delete unprioritized items (prune! skips confirmation)",
        cmd_prune,
    );

    reg.register("add", "<url> [name...]", "Add a source", cmd_add);
    reg.register("remove", "<source>", "Remove a source", cmd_remove);
    reg.register("pause", "<source>", "Pause a source", cmd_pause);
    reg.register("resume", "<source>", "Resume a paused source", cmd_resume);
    reg.register("rename", "<source> <name...>", "Rename a source", cmd_rename);

    reg.register(
        "priority",
        "all|high|medium|low",
        "Filter by priority",
        cmd_priority,
    );
    reg.register("show", "all|unread", "Show read items or only unread", cmd_show);
    reg.register(
        "type",
        "all|rss|reddit|youtube",
        "Filter by source type",
        cmd_type,
    );
    reg.register("sort", "[newest|oldest]", "Set or toggle sort order", cmd_sort);
    reg.register(
        "unprioritized",
        "[on|off]",
        "Show or hide unprioritized items",
        cmd_unprioritized,
    );
}

/// Error status carrying the verb's usage line
fn usage(state: &mut AppState, inv: &Invocation) -> UpdateResult {
    let line = state
        .commands
        .resolve(&inv.verb)
        .map(|spec| spec.usage_line())
        .unwrap_or_else(|_| inv.verb.clone());
    UpdateResult::action(state.error(format!("Usage: {}", line)))
}

fn cmd_quit(state: &mut AppState, _inv: &Invocation) -> UpdateResult {
    state.request_quit();
    UpdateResult::none()
}

fn cmd_help(state: &mut AppState, _inv: &Invocation) -> UpdateResult {
    overlays::open_help(state)
}

fn cmd_refresh(state: &mut AppState, _inv: &Invocation) -> UpdateResult {
    state.request_reload(RefreshKind::Manual).into()
}

fn cmd_sources(state: &mut AppState, _inv: &Invocation) -> UpdateResult {
    overlays::open_source_manager(state)
}

fn cmd_mark(state: &mut AppState, inv: &Invocation) -> UpdateResult {
    let read = match inv.arg(0) {
        None => None,
        Some("read") => Some(true),
        Some("unread") => Some(false),
        Some(_) => return usage(state, inv),
    };
    items::toggle_read(state, read)
}

fn cmd_favorite(state: &mut AppState, _inv: &Invocation) -> UpdateResult {
    items::toggle_favorite(state)
}

fn cmd_open(state: &mut AppState, _inv: &Invocation) -> UpdateResult {
    items::open_in_browser(state)
}

fn cmd_yank(state: &mut AppState, _inv: &Invocation) -> UpdateResult {
    items::yank_url(state)
}

fn cmd_copy(state: &mut AppState, _inv: &Invocation) -> UpdateResult {
    items::copy_content(state)
}

fn cmd_pattern(state: &mut AppState, inv: &Invocation) -> UpdateResult {
    match inv.arg(0) {
        Some(name) if inv.args.len() == 1 && !name.is_empty() => {
            items::run_pattern(state, name.to_string())
        }
        _ => usage(state, inv),
    }
}

fn cmd_prune(state: &mut AppState, inv: &Invocation) -> UpdateResult {
    if inv.args.len() > 1 {
        return usage(state, inv);
    }
    match crate::prune::parse_age(inv.arg(0)) {
        Ok(age_days) => prune::start_prune(state, age_days, inv.force),
        Err(e) => UpdateResult::action(state.error(format!("prune: {}", e))),
    }
}

fn cmd_add(state: &mut AppState, inv: &Invocation) -> UpdateResult {
    let Some(url) = inv.arg(0).filter(|u| !u.is_empty()) else {
        return usage(state, inv);
    };
    source_op(
        state,
        SourceOp::Add {
            url: url.to_string(),
            name: inv.rest(1),
        },
    )
}

fn cmd_remove(state: &mut AppState, inv: &Invocation) -> UpdateResult {
    with_source(state, inv, |id| SourceOp::Remove { id })
}

fn cmd_pause(state: &mut AppState, inv: &Invocation) -> UpdateResult {
    with_source(state, inv, |id| SourceOp::Pause { id })
}

fn cmd_resume(state: &mut AppState, inv: &Invocation) -> UpdateResult {
    with_source(state, inv, |id| SourceOp::Resume { id })
}

fn cmd_rename(state: &mut AppState, inv: &Invocation) -> UpdateResult {
    let (Some(needle), Some(name)) = (inv.arg(0), inv.rest(1)) else {
        return usage(state, inv);
    };
    match find_source(state, needle) {
        Ok(id) => source_op(state, SourceOp::Rename { id, name }),
        Err(msg) => UpdateResult::action(state.error(msg)),
    }
}

/// Source operation taking the whole argument list as the source name
fn with_source(
    state: &mut AppState,
    inv: &Invocation,
    op: impl FnOnce(SourceId) -> SourceOp,
) -> UpdateResult {
    let Some(needle) = inv.rest(0) else {
        return usage(state, inv);
    };
    match find_source(state, &needle) {
        Ok(id) => source_op(state, op(id)),
        Err(msg) => UpdateResult::action(state.error(msg)),
    }
}

/// Look up a source by id or case-insensitive name
fn find_source(state: &AppState, needle: &str) -> Result<SourceId, String> {
    state
        .sources
        .iter()
        .find(|s| s.matches(needle))
        .map(|s| s.id.clone())
        .ok_or_else(|| format!("No source matching '{}'", needle))
}

fn source_op(state: &mut AppState, op: SourceOp) -> UpdateResult {
    let notice = state.info(format!("{} {}...", capitalize(op.kind()), op.target()));
    UpdateResult::action(crate::handler::UpdateAction::SourceOp { op }).with_action(notice)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ─────────────────────────────────────────────────────────
// Filters
// ─────────────────────────────────────────────────────────

fn cmd_priority(state: &mut AppState, inv: &Invocation) -> UpdateResult {
    match inv.arg(0).map(str::parse::<PriorityFilter>) {
        Some(Ok(priority)) if inv.args.len() == 1 => {
            state.filters.priority = priority;
            filters_changed(state)
        }
        _ => usage(state, inv),
    }
}

fn cmd_show(state: &mut AppState, inv: &Invocation) -> UpdateResult {
    let show_all = match inv.arg(0) {
        Some("all") => true,
        Some("unread") => false,
        _ => return usage(state, inv),
    };
    state.filters.show_all = show_all;
    filters_changed(state)
}

fn cmd_type(state: &mut AppState, inv: &Invocation) -> UpdateResult {
    match inv.arg(0).map(parse_source_type_filter) {
        Some(Ok(source_type)) if inv.args.len() == 1 => {
            state.filters.source_type = source_type;
            filters_changed(state)
        }
        _ => usage(state, inv),
    }
}

fn cmd_sort(state: &mut AppState, inv: &Invocation) -> UpdateResult {
    let sort = match inv.arg(0) {
        None => state.filters.sort.toggled(),
        Some(arg) => match arg.parse::<SortDirection>() {
            Ok(sort) => sort,
            Err(_) => return usage(state, inv),
        },
    };
    state.filters.sort = sort;
    filters_changed(state)
}

fn cmd_unprioritized(state: &mut AppState, inv: &Invocation) -> UpdateResult {
    let show = match inv.arg(0) {
        None => !state.filters.show_unprioritized,
        Some("on") => true,
        Some("off") => false,
        Some(_) => return usage(state, inv),
    };
    state.filters.show_unprioritized = show;
    filters_changed(state)
}

fn filters_changed(state: &mut AppState) -> UpdateResult {
    crate::handler::update::reload_for_filters(state)
}
