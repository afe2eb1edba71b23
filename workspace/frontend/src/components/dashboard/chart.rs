use common::StockChartData;
use plotly::common::Marker;
use plotly::Bar;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

const STOCK_CHART_ID: &str = "stockChart";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = Plotly)]
    fn purge(div_id: &str) -> Result<(), JsValue>;
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

/// Owns the one chart instance drawn into a container.
///
/// A redraw purges the previous instance first, and so does dropping the slot.
pub struct ChartSlot {
    element_id: &'static str,
    drawn: bool,
}

impl ChartSlot {
    pub fn new(element_id: &'static str) -> Self {
        Self {
            element_id,
            drawn: false,
        }
    }

    pub fn redraw(&mut self, data: &StockChartData) -> Result<(), JsValue> {
        self.release();

        let colors: Vec<String> = data.colors.iter().map(|c| c.to_string()).collect();
        let trace = Bar::new(data.labels.clone(), data.percentages.clone())
            .name("Fill level")
            .marker(Marker::new().color_array(colors));

        let traces = js_sys::Array::new();
        traces.push(&to_js(&trace)?);

        let layout = serde_json::json!({
            "margin": {"t": 10, "r": 10, "l": 50, "b": 60},
            "paper_bgcolor": "rgba(0,0,0,0)",
            "plot_bgcolor": "rgba(0,0,0,0)",
            "showlegend": false,
            "xaxis": {"showgrid": false},
            "yaxis": {"range": [0, 100], "ticksuffix": "%", "gridcolor": "#eee"}
        });
        let config = serde_json::json!({"responsive": true, "displayModeBar": false});

        new_plot(self.element_id, traces.into(), to_js(&layout)?, to_js(&config)?)?;
        self.drawn = true;
        log::debug!("Stock chart drawn with {} bars", data.labels.len());
        Ok(())
    }

    pub fn release(&mut self) {
        if !self.drawn {
            return;
        }
        self.drawn = false;
        if let Err(err) = purge(self.element_id) {
            log::warn!("Failed to purge chart #{}: {:?}", self.element_id, err);
        }
    }
}

impl Drop for ChartSlot {
    fn drop(&mut self) {
        self.release();
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: Option<StockChartData>,
}

/// Bar chart of fill percentages, coloured by fill tier.
#[function_component(StockChart)]
pub fn stock_chart(props: &Props) -> Html {
    let slot = use_mut_ref(|| ChartSlot::new(STOCK_CHART_ID));

    {
        let slot = slot.clone();
        use_effect_with(props.data.clone(), move |data| {
            if let Some(data) = data {
                if let Err(err) = slot.borrow_mut().redraw(data) {
                    log::error!("Failed to draw stock chart: {:?}", err);
                }
            }
            || ()
        });
    }

    {
        let slot = slot.clone();
        use_effect_with((), move |_| move || slot.borrow_mut().release());
    }

    html! {
        <div id={STOCK_CHART_ID} class="chart-container" style="height: 300px;"></div>
    }
}
