mod output_distinctness;
mod sampler_uniformity;
mod secret_hygiene;
