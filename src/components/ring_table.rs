//! Tabular view of detected fraud rings.
//!
//! Display only: ring membership and scores come from the detection service
//! as-is. An empty list renders a quiet placeholder instead of a table.

use leptos::prelude::*;

use super::network_graph::FraudRing;

/// Lists detected fraud rings with pattern type, membership, and risk score.
#[component]
pub fn RingTable(#[prop(into)] rings: Signal<Vec<FraudRing>>) -> impl IntoView {
	view! {
		{move || {
			let rings = rings.get();
			if rings.is_empty() {
				view! {
					<div class="ring-table-empty" style="padding: 16px; color: #999;">
						"No fraud rings detected"
					</div>
				}
					.into_any()
			} else {
				view! {
					<div style="overflow-x: auto;">
						<table class="ring-table">
							<thead>
								<tr>
									<th>"Ring ID"</th>
									<th>"Pattern"</th>
									<th>"Members"</th>
									<th>"Risk Score"</th>
									<th>"Accounts"</th>
								</tr>
							</thead>
							<tbody>
								{rings
									.into_iter()
									.map(|ring| view! { <RingRow ring=ring /> })
									.collect_view()}
							</tbody>
						</table>
					</div>
				}
					.into_any()
			}
		}}
	}
}

/// One ring: headline cells plus an expandable member list.
#[component]
fn RingRow(ring: FraudRing) -> impl IntoView {
	let member_count = ring.member_accounts.len();

	view! {
		<tr>
			<td class="ring-id">{ring.ring_id}</td>
			<td>
				<span class=format!("pattern pattern-{}", ring.pattern_type)>
					{ring.pattern_type.clone()}
				</span>
			</td>
			<td>{member_count}</td>
			<td class="risk-score">{format!("{:.1}", ring.risk_score)}</td>
			<td>
				<details>
					<summary>{format!("{} accounts", member_count)}</summary>
					<div class="ring-members">
						{ring
							.member_accounts
							.into_iter()
							.map(|account| view! { <div class="ring-member">{account}</div> })
							.collect_view()}
					</div>
				</details>
			</td>
		</tr>
	}
}
