//! Numbered reasoning steps.

use leptos::prelude::*;

use crate::markdown::render_markdown;
use crate::ui::components::{Card, CardContent, CardHeader};

#[component]
pub fn ReasoningCard(reasoning: Vec<String>) -> impl IntoView {
    view! {
        <Card id="reasoning">
            <CardHeader>
                <h2 class="text-2xl font-bold text-primary">"Analysis Reasoning"</h2>
            </CardHeader>
            <CardContent class="space-y-4">
                {reasoning
                    .iter()
                    .enumerate()
                    .map(|(index, reason)| view! {
                        <div class="p-5 rounded-xl border border-panelBorder bg-panelMuted">
                            <div class="flex items-start gap-3">
                                <span class="flex-shrink-0 w-6 h-6 bg-primary text-white rounded-full flex items-center justify-center text-sm font-bold">
                                    {index + 1}
                                </span>
                                <div class="prose prose-sm max-w-none flex-1" inner_html=render_markdown(reason)></div>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </CardContent>
        </Card>
    }
}
