use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub value: String,
    /// Accent CSS class for the icon badge
    #[prop_or(AttrValue::Static("accent-indigo"))]
    pub accent: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-card">
            <div class={classes!("stat-card-icon", props.accent.to_string())}>
                {&props.icon}
            </div>
            <div class="stat-card-body">
                <p class="stat-card-title">{&props.title}</p>
                <p class="stat-card-value">{&props.value}</p>
            </div>
        </div>
    }
}
