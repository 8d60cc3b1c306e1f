use crate::{
    api::LeaveRequestRecord,
    pages::requests::utils::{count_matching, StatusFilter},
};
use leptos::*;

fn chip_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-full text-sm font-semibold bg-action-primary-bg text-action-primary-text"
    } else {
        "px-4 py-2 rounded-full text-sm font-medium bg-surface-muted text-fg-muted"
    }
}

#[component]
pub fn RequestsFilter(
    filter: RwSignal<StatusFilter>,
    #[prop(into)] records: Signal<Vec<LeaveRequestRecord>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2 mb-6">
            {StatusFilter::options()
                .into_iter()
                .map(|option| {
                    let count = move || records.with(|records| count_matching(records, option));
                    view! {
                        <button
                            type="button"
                            class=move || chip_class(filter.get() == option)
                            on:click=move |_| filter.set(option)
                        >
                            {option.label()}
                            " ("
                            {count}
                            ")"
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
