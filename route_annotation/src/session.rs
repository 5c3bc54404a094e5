use crate::{
    colorize, evaluate_tolls, evaluate_traffic, AnnotationError, AnnotationOptions,
    AnnotationReport, Colorized, Marker, ReferenceData, Route,
};

/// The layers currently drawn for one route: markers plus colored segments. Rebuilt from scratch
/// on every evaluation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderSession {
    pub markers: Vec<Marker>,
    pub colorized: Colorized,
}

impl RenderSession {
    pub fn reset(&mut self) {
        self.markers.clear();
        self.colorized = Colorized::default();
    }
}

/// Evaluates routes against a fixed set of reference data. Each call to `evaluate` replaces the
/// previous route's layers.
///
/// The reference data and options are checked once up front, so building an `Annotator` is where
/// bad tables or distances show up.
pub struct Annotator<'a> {
    data: &'a ReferenceData,
    opts: AnnotationOptions,
    session: RenderSession,
}

impl<'a> Annotator<'a> {
    pub fn new(
        data: &'a ReferenceData,
        opts: AnnotationOptions,
    ) -> Result<Annotator<'a>, AnnotationError> {
        data.validate()?;
        opts.validate()?;
        Ok(Annotator {
            data,
            opts,
            session: RenderSession::default(),
        })
    }

    /// On error, the previous route's layers are gone and nothing replaces them.
    pub fn evaluate(&mut self, route: &Route) -> Result<AnnotationReport, AnnotationError> {
        self.session.reset();

        let tolls = evaluate_tolls(
            route,
            &self.data.toll_roads,
            &self.opts,
            &mut self.session.markers,
        )?;
        let traffic = evaluate_traffic(
            route,
            &self.data.incidents,
            &self.opts,
            &mut self.session.markers,
        )?;
        self.session.colorized = colorize(route, &self.data.incidents, &self.opts)?;

        info!(
            "Route with {} points uses {} toll roads ({}), passes {} incidents ({} delay), and \
             has {} congested edges",
            route.coordinates().len(),
            tolls.toll_roads.len(),
            tolls.total_cost,
            traffic.matched_incidents.len(),
            traffic.total_delay(),
            self.session.colorized.overlays.len()
        );

        Ok(AnnotationReport::new(
            route,
            tolls,
            traffic,
            self.session.colorized.clone(),
        ))
    }

    /// The layers from the most recent evaluation.
    pub fn session(&self) -> &RenderSession {
        &self.session
    }

    pub fn options(&self) -> &AnnotationOptions {
        &self.opts
    }
}
