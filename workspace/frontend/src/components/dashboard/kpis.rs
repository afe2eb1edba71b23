use common::DashboardKpis;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub kpis: Option<DashboardKpis>,
}

#[function_component(Kpis)]
pub fn kpis(props: &Props) -> Html {
    let value = |f: fn(&DashboardKpis) -> String| {
        props.kpis.as_ref().map(f).unwrap_or_else(|| "-".to_string())
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-primary"><i class="fas fa-map-marker-alt text-2xl"></i></div>
                    <div class="stat-title">{"Active Sites"}</div>
                    <div id="totalSites" class="stat-value text-primary">{value(|k| k.site_count.to_string())}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-secondary"><i class="fas fa-cogs text-2xl"></i></div>
                    <div class="stat-title">{"Equipment"}</div>
                    <div id="totalEquipment" class="stat-value">{value(|k| k.equipment_count.to_string())}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-success"><i class="fas fa-gas-pump text-2xl"></i></div>
                    <div class="stat-title">{"Total Stock"}</div>
                    <div id="totalStock" class="stat-value text-success">{value(|k| k.total_stock_label())}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-error"><i class="fas fa-exclamation-triangle text-2xl"></i></div>
                    <div class="stat-title">{"Critical Alerts"}</div>
                    <div id="criticalAlerts" class="stat-value text-error">{value(|k| k.critical_alerts.to_string())}</div>
                    <div class="stat-desc">{"Last 24 hours"}</div>
                </div>
            </div>
        </div>
    }
}
