use contracts::domain::a001_item::aggregate::{Item, ItemDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_item::api;
use crate::shared::icons::icon;
use crate::system::auth::request_context::RequestContext;

/// What a form submission will send.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitPlan {
    Create(ItemDto),
    Update { id: String, dto: ItemDto },
}

/// Decide what a submission does, before any request goes out.
///
/// A blank name yields `None` and nothing is sent. A seeded record with an
/// identifier becomes an update; anything else is a create.
pub fn plan_submit(current: Option<&Item>, name: &str) -> Option<SubmitPlan> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let dto = ItemDto {
        name: name.to_string(),
    };
    match current {
        Some(item) if !item.id.is_empty() => Some(SubmitPlan::Update {
            id: item.id.clone(),
            dto,
        }),
        _ => Some(SubmitPlan::Create(dto)),
    }
}

#[component]
pub fn ItemForm<F1, F2>(item: Option<Item>, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let is_update = item.is_some();
    let name = RwSignal::new(item.as_ref().map(|i| i.name.clone()).unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let Some(plan) = plan_submit(item.as_ref(), &name.get()) else {
            set_error.set(Some("Name is required".to_string()));
            return;
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let ctx = RequestContext::current();
            let result = match plan {
                SubmitPlan::Create(dto) => api::create_item(&ctx, dto).await,
                SubmitPlan::Update { id, dto } => api::update_item(&ctx, &id, dto).await,
            };
            match result {
                Ok(()) => on_saved(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to save item: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    // The overlay deliberately has no click handler: the form only closes
    // through its own buttons.
    view! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal-header">
                    <h2 class="modal-title">
                        {if is_update { "Update Item" } else { "Create Item" }}
                    </h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close()
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Item Name"</Label>
                        <Input
                            value=name
                            placeholder="Item name"
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close()
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_blank_name_is_rejected_without_a_request() {
        assert_eq!(plan_submit(None, "   "), None);
        assert_eq!(plan_submit(Some(&existing("1", "Coffee")), ""), None);
    }

    #[test]
    fn test_create_when_no_identifier_is_present() {
        let plan = plan_submit(None, "Coffee");
        assert_eq!(
            plan,
            Some(SubmitPlan::Create(ItemDto {
                name: "Coffee".to_string()
            }))
        );
    }

    #[test]
    fn test_update_targets_the_existing_identifier() {
        let item = existing("42", "Old name");
        let plan = plan_submit(Some(&item), "New name");
        assert_eq!(
            plan,
            Some(SubmitPlan::Update {
                id: "42".to_string(),
                dto: ItemDto {
                    name: "New name".to_string()
                }
            })
        );
    }

    #[test]
    fn test_record_without_identifier_falls_back_to_create() {
        let item = existing("", "Coffee");
        let plan = plan_submit(Some(&item), "Coffee");
        assert_eq!(
            plan,
            Some(SubmitPlan::Create(ItemDto {
                name: "Coffee".to_string()
            }))
        );
    }

    #[test]
    fn test_submitted_name_is_trimmed() {
        let plan = plan_submit(None, "  Tea  ");
        assert_eq!(
            plan,
            Some(SubmitPlan::Create(ItemDto {
                name: "Tea".to_string()
            }))
        );
    }
}
