//! Referenced policy excerpts.

use leptos::prelude::*;

use crate::markdown::render_markdown;
use crate::ui::components::{Card, CardContent, CardHeader};

/// Policy texts the analysis relied on, rendered as Markdown.
#[component]
pub fn PoliciesCard(policies: Vec<String>) -> impl IntoView {
    let empty = policies.is_empty();

    view! {
        <Card id="policies">
            <CardHeader>
                <h2 class="text-2xl font-bold text-primary">"Policies Referenced"</h2>
            </CardHeader>
            <CardContent class="space-y-4">
                {empty.then(|| view! {
                    <p class="text-textMuted">"No policies were referenced."</p>
                })}
                {policies
                    .iter()
                    .map(|policy| view! {
                        <div class="border-l-4 border-primary bg-primary/5 p-5 rounded-r-lg">
                            <div class="prose prose-sm max-w-none" inner_html=render_markdown(policy)></div>
                        </div>
                    })
                    .collect_view()}
            </CardContent>
        </Card>
    }
}
