use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchableSelectProps {
    pub options: Vec<String>,
    pub value: Option<String>,
    pub on_change: Callback<String>,
    pub placeholder: String,
    #[prop_or_default]
    pub disabled: bool,
}

/// Dropdown with an embedded filter box, for long option lists like
/// the country picker.
#[function_component(SearchableSelect)]
pub fn searchable_select(props: &SearchableSelectProps) -> Html {
    let open = use_state(|| false);
    let search_term = use_state(String::new);

    let on_toggle = {
        let open = open.clone();
        let search_term = search_term.clone();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if disabled {
                return;
            }
            if *open {
                search_term.set(String::new());
            }
            open.set(!*open);
        })
    };

    let on_search = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            search_term.set(value);
        })
    };

    let needle = search_term.to_lowercase();
    let filtered: Vec<String> = props
        .options
        .iter()
        .filter(|option| option.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    html! {
        <div class="searchable-select">
            <button
                type="button"
                class="select-toggle"
                onclick={on_toggle}
                disabled={props.disabled}
            >
                { props.value.clone().unwrap_or_else(|| props.placeholder.clone()) }
            </button>
            if *open {
                <div class="select-dropdown">
                    <input
                        type="text"
                        class="select-search"
                        placeholder="Search..."
                        value={(*search_term).clone()}
                        oninput={on_search}
                    />
                    <ul class="select-options">
                        if filtered.is_empty() {
                            <li class="select-empty">{"No results found"}</li>
                        } else {
                            { for filtered.iter().map(|option| {
                                let on_pick = {
                                    let on_change = props.on_change.clone();
                                    let open = open.clone();
                                    let search_term = search_term.clone();
                                    let option = option.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        on_change.emit(option.clone());
                                        search_term.set(String::new());
                                        open.set(false);
                                    })
                                };
                                let selected =
                                    props.value.as_deref() == Some(option.as_str());
                                html! {
                                    <li
                                        class={classes!(selected.then_some("selected"))}
                                        onclick={on_pick}
                                    >
                                        { option.clone() }
                                    </li>
                                }
                            })}
                        }
                    </ul>
                </div>
            }
        </div>
    }
}
