use crate::components::ui::Card;
use crate::i18n::{Lang, tr};
use eatwise_core::LeaderboardRow;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LeaderboardPageProps {
    pub lang: Lang,
    pub rows: Vec<LeaderboardRow>,
}

#[function_component(LeaderboardPage)]
pub fn leaderboard_page(props: &LeaderboardPageProps) -> Html {
    html! {
        <Card title={tr(props.lang, "leaderboard.title", &[(Lang::En, "Community Leaderboard"), (Lang::Hi, "समुदाय लीडरबोर्ड")])}>
            <table class="table table-sm" data-testid="leaderboard-table">
                <thead>
                    <tr>
                        <th>{"#"}</th>
                        <th>{ tr(props.lang, "leaderboard.name", &[(Lang::En, "Name"), (Lang::Hi, "नाम")]) }</th>
                        <th class="text-right">{ tr(props.lang, "leaderboard.points", &[(Lang::En, "Points"), (Lang::Hi, "अंक")]) }</th>
                        <th class="text-right">{ tr(props.lang, "leaderboard.reduced", &[(Lang::En, "Reduced"), (Lang::Hi, "कमी")]) }</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| html! {
                        <tr class={(row.rank <= 3).then_some("font-semibold")}>
                            <td>{ row.rank }</td>
                            <td>{ row.name.clone() }</td>
                            <td class="text-right">{ row.points }</td>
                            <td class="text-right">{ format!("{}%", row.reduction_pct) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::{LeaderboardPage, LeaderboardPageProps};
    use crate::i18n::Lang;
    use eatwise_core::MockData;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn leaderboard_renders_ranked_rows() {
        let rows = MockData::new(5).leaderboard();
        let top = rows[0].name.clone();
        let props = LeaderboardPageProps {
            lang: Lang::En,
            rows,
        };
        let html = block_on(LocalServerRenderer::<LeaderboardPage>::with_props(props).render());
        assert!(html.contains(&top));
        assert!(html.contains("leaderboard-table"));
    }
}
