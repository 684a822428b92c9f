use crate::components::ui::{Card, Stat};
use crate::i18n::{Lang, tr};
use eatwise_core::{RewardKind, catalog};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RewardsPageProps {
    pub lang: Lang,
    pub balance: i64,
    /// Emits a catalog reward id.
    pub on_claim: Callback<String>,
    pub on_redeem: Callback<String>,
}

#[function_component(RewardsPage)]
pub fn rewards_page(props: &RewardsPageProps) -> Html {
    html! {
        <div class="space-y-6" data-testid="rewards-screen">
            <Stat
                label={tr(props.lang, "rewards.balance", &[(Lang::En, "Points Balance"), (Lang::Hi, "अंक शेष")])}
                value={props.balance.to_string()}
                hint={tr(props.lang, "rewards.hint", &[(Lang::En, "Earn more by logging daily"), (Lang::Hi, "रोज़ लॉग करके और कमाएँ")])}
                class={classes!("w-full")}
            />

            <Card title={tr(props.lang, "rewards.earn", &[(Lang::En, "Earn Points"), (Lang::Hi, "अंक कमाएँ")])}>
                <ul class="space-y-3">
                    { for catalog().iter().filter(|r| r.kind == RewardKind::Bonus).map(|reward| {
                        let on_claim = props.on_claim.clone();
                        let id = reward.id.to_string();
                        let onclick = Callback::from(move |_| on_claim.emit(id.clone()));
                        html! {
                            <li class="flex items-center justify-between gap-2">
                                <div>
                                    <p class="font-medium text-sm">{ reward.title }</p>
                                    <p class="text-xs text-base-content/60">{ reward.detail }</p>
                                </div>
                                <button class="btn btn-primary btn-sm" {onclick} data-testid={format!("claim-{}", reward.id)}>
                                    { format!("+{}", reward.points) }
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            </Card>

            <Card title={tr(props.lang, "rewards.redeem", &[(Lang::En, "Redeem"), (Lang::Hi, "रिडीम करें")])}>
                <ul class="space-y-3">
                    { for catalog().iter().filter(|r| r.kind == RewardKind::Redeemable).map(|reward| {
                        let on_redeem = props.on_redeem.clone();
                        let id = reward.id.to_string();
                        let onclick = Callback::from(move |_| on_redeem.emit(id.clone()));
                        let affordable = props.balance >= reward.points;
                        html! {
                            <li class="flex items-center justify-between gap-2">
                                <div>
                                    <p class="font-medium text-sm">{ reward.title }</p>
                                    <p class="text-xs text-base-content/60">{ reward.detail }</p>
                                </div>
                                <button class="btn btn-outline btn-sm" {onclick} disabled={!affordable}
                                        data-testid={format!("redeem-{}", reward.id)}>
                                    { format!("{} pts", reward.points) }
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            </Card>
        </div>
    }
}
