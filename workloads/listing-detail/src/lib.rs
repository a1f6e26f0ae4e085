//! Listing detail page.
//!
//! Resolves a listing by SEO slug (`/:categorySlug/:titleSlug`) against the
//! bundled collection, or by identifier (`/listing/:id`,
//! `/transport/:category/:id`) against the remote store first and the bundled
//! collection second, then the vehicle catalog. The page is streamed shell
//! first; unresolved listings get a complete 404 document. HEAD requests get
//! the same status and headers without a body.

use anyhow::{anyhow, Context};
use futures::SinkExt;
use spin_sdk::http::{
    Fields, IncomingRequest, Method as SpinMethod, OutgoingResponse, ResponseOutparam,
};
use spin_sdk::http_component;

use market_catalog::{CategoryRegistry, MockCollection, TransportCatalog};
use market_core::{
    ConfigError, Language, MarketConfig, Method, RequestContext, Route, WorkloadError,
    WorkloadInfo,
};
use market_data::{
    FetchClient, ListingResolver, LookupKey, PageSession, PageState, RemoteListingSource,
};
use market_observability::{LogFormat, LogLevel, StructuredLogger};
use market_render::{render_not_found_page, stream_detail_page, DetailPage, StreamingSink};

const WORKLOAD: WorkloadInfo = WorkloadInfo {
    name: "listing-detail",
    routes: &["/listing/:id", "/transport/:category/:id", "/:categorySlug/:titleSlug"],
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

    if let Err(e) = serve(ctx, &config, language, &logger, response_out).await {
        logger
            .error_builder("Detail request failed")
            .field("error", format!("{:#}", e))
            .emit();
    }
}

async fn serve(
    ctx: RequestContext,
    config: &MarketConfig,
    language: Language,
    logger: &StructuredLogger,
    response_out: ResponseOutparam,
) -> anyhow::Result<()> {
    if !ctx.method.is_read() {
        let status = WorkloadError::MethodNotAllowed.status().as_u16();
        logger.warn_builder("Method not allowed").field_i64("status", status as i64).emit();
        return send_document(response_out, status, &ctx, language, String::new()).await;
    }

    let route = Route::parse(&ctx.path);
    let key = LookupKey::from_route(&route);
    logger
        .info_builder("Detail request started")
        .field("lookup", key.as_ref().map(LookupKey::describe).unwrap_or_default())
        .emit();

    let mock = MockCollection::load().context("loading bundled listings")?;
    let vehicles = TransportCatalog::load().context("loading transport listings")?;
    let mut resolver = ListingResolver::new(mock, CategoryRegistry::builtin(), logger.clone())
        .with_transport_catalog(vehicles)
        .with_similar_limit(config.similar_limit);
    if config.remote_lookup {
        let client = FetchClient::new(ctx.request_id.clone());
        resolver = resolver.with_remote(RemoteListingSource::new(client, config.api_base.clone()));
    }

    let mut session = PageSession::new();
    let resolved = match session.load(&resolver, key).await {
        PageState::Loaded(resolved) => resolved.clone(),
        PageState::Loading | PageState::NotFound => {
            logger.info("Listing not found");
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

    let page = DetailPage::assemble(resolved, &resolver, language, &site_url(&ctx));

    let response = response_with(200, &ctx, language)?;
    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    stream_detail_page(&mut sink, &page, logger)
        .await
        .context("streaming detail page")?;
    Ok(())
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

/// Defaults overlaid with Spin application variables. A malformed variable
/// keeps its default and is reported.
fn load_config() -> (MarketConfig, Vec<ConfigError>) {
    MarketConfig::default().with_overrides(|key| spin_sdk::variables::get(key).ok())
}

/// Origin the share and canonical URLs are built on.
fn site_url(ctx: &RequestContext) -> String {
    ctx.header("host")
        .map(|host| format!("https://{}", host))
        .unwrap_or_default()
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
