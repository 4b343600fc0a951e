use contracts::domain::a002_order_type::aggregate::{OrderType, OrderTypeDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_order_type::api;
use crate::shared::icons::icon;
use crate::system::auth::request_context::RequestContext;

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitPlan {
    Create(OrderTypeDto),
    Update { id: String, dto: OrderTypeDto },
}

/// Decide what a submission does. Blank names yield `None`; a seeded
/// record with an identifier becomes an update.
pub fn plan_submit(current: Option<&OrderType>, name: &str) -> Option<SubmitPlan> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let dto = OrderTypeDto {
        name: name.to_string(),
    };
    match current {
        Some(order_type) if !order_type.id.is_empty() => Some(SubmitPlan::Update {
            id: order_type.id.clone(),
            dto,
        }),
        _ => Some(SubmitPlan::Create(dto)),
    }
}

// The modal titles say "Payment Type"; the backend has always named the
// aggregate "order type" and the rest of the UI follows it.
#[component]
pub fn OrderTypeForm<F1, F2>(order_type: Option<OrderType>, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let is_update = order_type.is_some();
    let name = RwSignal::new(
        order_type
            .as_ref()
            .map(|t| t.name.clone())
            .unwrap_or_default(),
    );
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let Some(plan) = plan_submit(order_type.as_ref(), &name.get()) else {
            set_error.set(Some("Name is required".to_string()));
            return;
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let ctx = RequestContext::current();
            let result = match plan {
                SubmitPlan::Create(dto) => api::create_order_type(&ctx, dto).await,
                SubmitPlan::Update { id, dto } => api::update_order_type(&ctx, &id, dto).await,
            };
            match result {
                Ok(()) => on_saved(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to save order type: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal-header">
                    <h2 class="modal-title">
                        {if is_update { "Update Payment Type" } else { "Create Payment Type" }}
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
                        <Label>"Order Type"</Label>
                        <Input
                            value=name
                            placeholder="Order type"
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

    fn existing(id: &str, name: &str) -> OrderType {
        OrderType {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_blank_name_is_rejected_without_a_request() {
        assert_eq!(plan_submit(None, ""), None);
        assert_eq!(plan_submit(Some(&existing("1", "Delivery")), "  "), None);
    }

    #[test]
    fn test_create_when_no_identifier_is_present() {
        let plan = plan_submit(None, "Delivery");
        assert_eq!(
            plan,
            Some(SubmitPlan::Create(OrderTypeDto {
                name: "Delivery".to_string()
            }))
        );
    }

    #[test]
    fn test_update_targets_the_existing_identifier() {
        let order_type = existing("5f2c", "Delivery");
        let plan = plan_submit(Some(&order_type), "Express");
        assert_eq!(
            plan,
            Some(SubmitPlan::Update {
                id: "5f2c".to_string(),
                dto: OrderTypeDto {
                    name: "Express".to_string()
                }
            })
        );
    }

    #[test]
    fn test_record_without_identifier_falls_back_to_create() {
        let order_type = existing("", "Pickup");
        let plan = plan_submit(Some(&order_type), "Pickup");
        assert_eq!(
            plan,
            Some(SubmitPlan::Create(OrderTypeDto {
                name: "Pickup".to_string()
            }))
        );
    }

    #[test]
    fn test_submitted_name_is_trimmed() {
        let plan = plan_submit(None, " Pickup ");
        assert_eq!(
            plan,
            Some(SubmitPlan::Create(OrderTypeDto {
                name: "Pickup".to_string()
            }))
        );
    }
}
