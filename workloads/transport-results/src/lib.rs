//! Transport results page.
//!
//! Renders the vehicle catalog as a grid of listing cards, optionally narrowed
//! to one transport category (`/transport/:category`). Favorites come from the
//! `favorites` cookie as a comma-separated list of listing ids. HEAD requests
//! get the status and headers without a body.

use std::collections::HashSet;

use anyhow::{anyhow, Context};
use chrono::Utc;
use futures::SinkExt;
use spin_sdk::http::{
    Fields, IncomingRequest, Method as SpinMethod, OutgoingResponse, ResponseOutparam,
};
use spin_sdk::http_component;

use market_catalog::TransportCatalog;
use market_core::{
    ConfigError, Language, MarketConfig, Method, RequestContext, Route, WorkloadError,
    WorkloadInfo,
};
use market_observability::{LogFormat, LogLevel, StructuredLogger};
use market_render::{
    escape_html, render_card_grid, render_not_found_page, site_footer, site_header, HeadContent,
    Shell, StreamingSink, MARKET_STYLES,
};

const WORKLOAD: WorkloadInfo = WorkloadInfo {
    name: "transport-results",
    routes: &["/transport", "/transport/:category"],
};

#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let ctx = request_context(&req);
    let (config, config_errors) = load_config();
    let language = ctx.language(config.default_language);

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_workload(WORKLOAD.name)
        .with_route(&ctx.path)
        .with_language(language)
        .with_min_level(LogLevel::from_name(&config.log_level).unwrap_or(LogLevel::Info))
        .with_format(LogFormat::from_name(&config.log_format));

    for error in &config_errors {
        logger
            .warn_builder("Ignoring invalid configuration value")
            .field("error", error.to_string())
            .emit();
    }

    if let Err(e) = serve(ctx, language, &logger, response_out).await {
        logger
            .error_builder("Transport request failed")
            .field("error", format!("{:#}", e))
            .emit();
    }
}

async fn serve(
    ctx: RequestContext,
    language: Language,
    logger: &StructuredLogger,
    response_out: ResponseOutparam,
) -> anyhow::Result<()> {
    if !ctx.method.is_read() {
        let status = WorkloadError::MethodNotAllowed.status().as_u16();
        logger.warn_builder("Method not allowed").field_i64("status", status as i64).emit();
        return send_document(response_out, status, &ctx, language, String::new()).await;
    }

    let category = match Route::parse(&ctx.path) {
        Route::TransportResults { category } => category,
        _ => {
            logger.info("Route not served");
            let html = if ctx.method.sends_body() {
                render_not_found_page(language)
            } else {
                String::new()
            };
            return send_document(response_out, 404, &ctx, language, html).await;
        }
    };

    if !ctx.method.sends_body() {
        return send_document(response_out, 200, &ctx, language, String::new()).await;
    }

    let catalog = TransportCatalog::load().context("loading transport listings")?;
    let listings = catalog.in_category(category.as_deref());
    let favorites = favorite_ids(&ctx);
    logger
        .info_builder("Transport results")
        .field("category", category.clone().unwrap_or_default())
        .field_i64("count", listings.len() as i64)
        .emit();

    let heading = page_heading(category.as_deref(), language);
    let shell = Shell::new(
        language,
        HeadContent::new(heading.clone())
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(MARKET_STYLES),
    )
    .with_body_start(site_header(language, &ctx.path))
    .with_body_end(site_footer(language));

    let response = response_with(200, &ctx, language)?;
    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    sink.send_shell(&shell.render_opening()).await?;
    sink.send_section(
        "results-header",
        &format!(
            "<h1 class=\"results-title\">{}</h1>\n<p class=\"results-count\">{}: {}</p>\n",
            escape_html(&heading),
            language.pick("Найдено объявлений", "Табылған хабарландырулар"),
            listings.len()
        ),
    )
    .await?;

    let now = Utc::now();
    let grid = render_card_grid(&listings, language, &now, |id| {
        favorites.contains(id.as_str())
    });
    sink.send_section("cards", &grid).await?;
    sink.finish(&shell.render_closing()).await?;

    logger
        .debug_builder("Transport page streamed")
        .field_i64("bytes", sink.bytes_sent() as i64)
        .emit();
    Ok(())
}

/// Heading for the grid: the category name, or the transport section name.
fn page_heading(category: Option<&str>, language: Language) -> String {
    let name = match category {
        None => language.pick("Транспорт", "Көлік"),
        Some("cars") => language.pick("Легковые автомобили", "Жеңіл көліктер"),
        Some("moto") => language.pick("Мототехника", "Мототехника"),
        Some("trucks") => language.pick("Грузовики", "Жүк көліктері"),
        Some(other) => other,
    };
    name.to_string()
}

fn favorite_ids(ctx: &RequestContext) -> HashSet<String> {
    ctx.cookie("favorites")
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn request_context(req: &IncomingRequest) -> RequestContext {
    let method = match req.method() {
        SpinMethod::Get => Method::Get,
        SpinMethod::Head => Method::Head,
        SpinMethod::Post => Method::Post,
        _ => Method::Other,
    };
    let path = req.path_with_query().unwrap_or_default();

    req.headers()
        .entries()
        .into_iter()
        .filter_map(|(name, value)| String::from_utf8(value).ok().map(|v| (name, v)))
        .fold(RequestContext::new(method, path), |ctx, (name, value)| {
            ctx.with_header(name, value)
        })
}

fn load_config() -> (MarketConfig, Vec<ConfigError>) {
    MarketConfig::default().with_overrides(|key| spin_sdk::variables::get(key).ok())
}

fn response_with(
    status: u16,
    ctx: &RequestContext,
    language: Language,
) -> anyhow::Result<OutgoingResponse> {
    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("content-language".to_owned(), language.code().into()),
        ("x-request-id".to_owned(), ctx.request_id.to_string().into()),
    ];
    let headers =
        Fields::from_list(&header_list).map_err(|e| anyhow!("invalid headers: {:?}", e))?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(status)
        .map_err(|_| anyhow!("invalid status code {}", status))?;
    Ok(response)
}

/// Send a complete, non-streamed document. An empty document sends headers only.
async fn send_document(
    response_out: ResponseOutparam,
    status: u16,
    ctx: &RequestContext,
    language: Language,
    html: String,
) -> anyhow::Result<()> {
    let response = response_with(status, ctx, language)?;
    let mut body = response.take_body();
    response_out.set(response);
    if !html.is_empty() {
        body.send(html.into_bytes())
            .await
            .map_err(|e| anyhow!("writing body: {}", e))?;
    }
    body.close().await.map_err(|e| anyhow!("closing body: {}", e))?;
    Ok(())
}
