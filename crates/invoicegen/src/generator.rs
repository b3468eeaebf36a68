//! Invoice generation facade

use log::{debug, info};
use serde::{Deserialize, Serialize};
use template::{PlaceholderMap, RenderRequest, Renderer};

use crate::company::{CompanyData, InvoiceFlags};
use crate::preview;
use crate::skeleton::{EmbeddedSkeleton, SkeletonStore};
use crate::{InvoiceError, Result};

/// Inputs to one invoice render.
///
/// Treated as read-only; build a fresh request per invoice. `billing`
/// carries the per-invoice values (invoice number, date, party details,
/// item rows, totals, amount in words) exactly as they should appear in the
/// document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceRequest {
    pub company: CompanyData,
    #[serde(default)]
    pub flags: InvoiceFlags,
    /// Theme color replacing the skeleton's accent sentinel.
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default)]
    pub billing: PlaceholderMap,
}

/// Renders invoices from a loaded skeleton.
#[derive(Debug)]
pub struct InvoiceGenerator {
    skeleton: String,
    renderer: Renderer,
}

impl InvoiceGenerator {
    /// Create a generator over the store's skeleton.
    ///
    /// Fails with [`InvoiceError::SkeletonNotFound`] when the store reports
    /// the document missing; nothing is rendered in that case.
    pub fn new(store: &dyn SkeletonStore) -> Result<Self> {
        let skeleton = store.load().ok_or(InvoiceError::SkeletonNotFound)?;
        debug!("loaded invoice skeleton ({} bytes)", skeleton.len());
        Ok(Self {
            skeleton,
            renderer: Renderer::new()?,
        })
    }

    /// Create a generator over the embedded default skeleton.
    pub fn embedded() -> Result<Self> {
        Self::new(&EmbeddedSkeleton)
    }

    /// Render a complete invoice from the request's own billing values.
    pub fn generate(&self, request: &InvoiceRequest) -> Result<String> {
        let values = self.company_values(request)?;
        info!(
            "rendering invoice (gst: {}, hsn: {}, international: {})",
            request.flags.gst, request.flags.hsn, request.flags.international
        );
        Ok(self.render(request, values, &request.billing))
    }

    /// Render the preview variant: sample party data stands in for the
    /// request's billing values.
    pub fn preview(&self, request: &InvoiceRequest) -> Result<String> {
        let values = self.company_values(request)?;
        debug!("rendering preview (gst: {})", request.flags.gst);
        Ok(self.render(request, values, &preview::sample_billing(request.flags.gst)))
    }

    fn company_values(&self, request: &InvoiceRequest) -> Result<PlaceholderMap> {
        request
            .company
            .validate(&request.flags)
            .map_err(InvoiceError::Invalid)?;
        Ok(request.company.placeholders())
    }

    fn render(
        &self,
        request: &InvoiceRequest,
        mut values: PlaceholderMap,
        billing: &PlaceholderMap,
    ) -> String {
        values.extend_from(billing);
        let render_request = RenderRequest {
            conditions: request.flags.conditions(),
            values,
            accent: request.accent.clone(),
        };
        self.renderer.render(&self.skeleton, &render_request)
    }
}
