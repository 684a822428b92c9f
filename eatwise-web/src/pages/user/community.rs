use crate::components::ui::Card;
use crate::i18n::{Lang, tr};
use eatwise_core::CommunityPost;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct CommunityPageProps {
    pub lang: Lang,
    pub posts: Vec<CommunityPost>,
}

#[function_component(CommunityPage)]
pub fn community_page(props: &CommunityPageProps) -> Html {
    // Likes are simulated locally and reset on reload.
    let extra_likes = use_state(|| vec![0_u32; props.posts.len()]);

    html! {
        <div class="space-y-4" data-testid="community-screen">
            <h1 class="text-2xl font-bold">
                { tr(props.lang, "community.title", &[(Lang::En, "Community"), (Lang::Hi, "समुदाय")]) }
            </h1>
            { for props.posts.iter().enumerate().map(|(i, post)| {
                let extra = extra_likes.get(i).copied().unwrap_or(0);
                let like = {
                    let extra_likes = extra_likes.clone();
                    Callback::from(move |_| {
                        let mut next = (*extra_likes).clone();
                        if let Some(slot) = next.get_mut(i) {
                            *slot += 1;
                        }
                        extra_likes.set(next);
                    })
                };
                html! {
                    <Card subtitle={post.author.clone()}>
                        <p class="text-sm">{ post.message.clone() }</p>
                        <button class="btn btn-ghost btn-xs self-start" onclick={like}>
                            { format!("❤️ {}", post.likes + extra) }
                        </button>
                    </Card>
                }
            }) }
        </div>
    }
}
