mod openweather;

pub use openweather::OpenWeatherClient;
