// Service exports
pub mod http;
pub mod nominatim;
pub mod overpass;

pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};
pub use nominatim::{GeocodeError, Geocoder};
pub use overpass::{AreaSearch, OverpassError};
